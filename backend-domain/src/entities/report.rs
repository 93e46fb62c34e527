// Report structures produced by the aggregation and compliance engines

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{DailySummary, HotelEvent, NationalityCount, PeriodTotals};
use crate::value_objects::{ComplianceStatus, EventType};

#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub hotel_id: i64,
    pub date: NaiveDate,
    pub summary: DailySummary,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

/// Weekly and monthly rollup report. Monthly reports additionally carry
/// the compliance-issue enrichment.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub hotel_id: i64,
    pub period: ReportPeriod,
    pub totals: PeriodTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_summary: Option<ComplianceIssueSummary>,
    pub daily_breakdown: Vec<DailySummary>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceIssueSummary {
    pub total_issues: usize,
    pub issues: Vec<ComplianceIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceIssue {
    pub event_id: String,
    pub event_type: EventType,
    pub compliance_status: ComplianceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    pub hotel_id: i64,
    pub report_period: ReportPeriod,
    pub summary: EventTypeBreakdown,
    pub guest_statistics: GuestStatistics,
    pub compliance_summary: ComplianceBreakdown,
    pub detailed_events: Vec<HotelEvent>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EventTypeBreakdown {
    pub total_checkins: usize,
    pub total_checkouts: usize,
    pub total_room_changes: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GuestStatistics {
    pub unique_guests: usize,
    pub total_guest_interactions: usize,
    pub nationalities: Vec<NationalityCount>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ComplianceBreakdown {
    pub total_events: usize,
    pub compliant_events: usize,
    pub non_compliant_events: usize,
    pub pending_review: usize,
    /// Percentage rounded to 2 decimals; `None` when there are no events.
    pub compliance_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveStatus {
    pub hotel_id: i64,
    pub date: NaiveDate,
    pub metrics: LiveMetrics,
    pub room_statuses: Vec<RoomStatusSnapshot>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LiveMetrics {
    pub checkins_today: i64,
    pub checkouts_today: i64,
    pub room_changes_today: i64,
    pub net_occupancy_change: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomStatusSnapshot {
    pub room_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_status: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub hotel_id: i64,
    pub period_days: i64,
    pub metrics: DashboardMetrics,
    pub daily_summaries: Vec<DailySummary>,
    pub recent_events: Vec<HotelEvent>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardMetrics {
    pub total_checkins: i64,
    pub total_checkouts: i64,
    pub total_revenue: f64,
    pub average_occupancy: f64,
    pub net_occupancy_change: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupancyReport {
    pub hotel_id: i64,
    pub period: ReportPeriod,
    pub summary: OccupancySummary,
    pub trends: Vec<OccupancyPoint>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OccupancySummary {
    pub average_occupancy: f64,
    pub max_occupancy: f64,
    pub min_occupancy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupancyPoint {
    pub date: NaiveDate,
    pub occupancy_rate: f64,
    pub checkins: i64,
    pub checkouts: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevenuePeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub hotel_id: i64,
    pub period: RevenuePeriod,
    pub revenue_breakdown: Vec<RevenueBucket>,
    pub summary: RevenueSummary,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevenueBucket {
    pub period_key: String,
    pub total_revenue: f64,
    pub additional_charges: f64,
    pub total_checkins: i64,
    pub total_checkouts: i64,
    /// `None` when the bucket has no checkouts.
    pub revenue_per_checkout: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub total_additional_charges: f64,
    pub total_checkouts: i64,
}
