// Source system value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceSystem {
    #[default]
    Pms,
    MobileApp,
    AdminPanel,
    Api,
}

impl SourceSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceSystem::Pms => "pms",
            SourceSystem::MobileApp => "mobile_app",
            SourceSystem::AdminPanel => "admin_panel",
            SourceSystem::Api => "api",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pms" => Some(SourceSystem::Pms),
            "mobile_app" => Some(SourceSystem::MobileApp),
            "admin_panel" => Some(SourceSystem::AdminPanel),
            "api" => Some(SourceSystem::Api),
            _ => None,
        }
    }
}
