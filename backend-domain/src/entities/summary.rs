// Daily summary entity
// Cached aggregate of one hotel's events for one calendar day.
// At most one summary per (hotel_id, date); once created it is the
// cached truth for that day and is never recomputed implicitly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub hotel_id: i64,
    pub date: NaiveDate,
    pub total_checkins: i64,
    pub total_checkouts: i64,
    pub total_room_changes: i64,
    /// Placeholder until room inventory is wired in.
    pub occupancy_rate: f64,
    /// Placeholder until room inventory is wired in.
    pub average_stay_duration: f64,
    pub total_revenue: f64,
    pub additional_charges: f64,
    pub room_status: RoomStatusBreakdown,
    pub guest_nationalities: Vec<NationalityCount>,
    pub compliance_score: f64,
    pub compliance_issues: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomStatusBreakdown {
    pub available: i64,
    pub occupied: i64,
    pub dirty: i64,
    pub maintenance: i64,
    pub blocked: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityCount {
    pub country: String,
    pub count: i64,
}

/// Sum/average composition of several daily summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub total_checkins: i64,
    pub total_checkouts: i64,
    pub total_room_changes: i64,
    pub total_revenue: f64,
    pub additional_charges: f64,
    pub average_occupancy_rate: f64,
    pub average_stay_duration: f64,
}
