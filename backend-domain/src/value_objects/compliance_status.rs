// Compliance status value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    #[default]
    Pending,
    Compliant,
    NonCompliant,
    ReviewRequired,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Pending => "pending",
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::NonCompliant => "non_compliant",
            ComplianceStatus::ReviewRequired => "review_required",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ComplianceStatus::Pending),
            "compliant" => Some(ComplianceStatus::Compliant),
            "non_compliant" => Some(ComplianceStatus::NonCompliant),
            "review_required" => Some(ComplianceStatus::ReviewRequired),
            _ => None,
        }
    }
}
