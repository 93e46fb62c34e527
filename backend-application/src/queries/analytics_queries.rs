use chrono::{Duration, NaiveDate, Utc};

use backend_domain::services::aggregator;
use backend_domain::{
    round2, DashboardMetrics, DashboardReport, OccupancyPoint, OccupancyReport,
    OccupancySummary, ReportPeriod, RevenuePeriod, RevenueReport, RevenueSummary,
};

use crate::{AppError, AppState};

const DEFAULT_DASHBOARD_DAYS: i64 = 30;
const RECENT_EVENT_LIMIT: u32 = 10;

/// Trailing-window dashboard over cached summaries plus the most recent
/// raw events.
pub async fn dashboard(
    state: &AppState,
    hotel_id: i64,
    days: Option<i64>,
) -> Result<DashboardReport, AppError> {
    let days = days.unwrap_or(DEFAULT_DASHBOARD_DAYS).max(1);
    let today = Utc::now().date_naive();
    let start = today - Duration::days(days);

    let summaries = state
        .summary_repo
        .fetch_range(hotel_id, start, today)
        .await?;
    let recent_events = state
        .event_repo
        .fetch_recent(hotel_id, RECENT_EVENT_LIMIT)
        .await?;

    let total_checkins: i64 = summaries.iter().map(|d| d.total_checkins).sum();
    let total_checkouts: i64 = summaries.iter().map(|d| d.total_checkouts).sum();
    let total_revenue: f64 = summaries.iter().map(|d| d.total_revenue).sum();
    let occupancy_sum: f64 = summaries.iter().map(|d| d.occupancy_rate).sum();
    let average_occupancy = round2(occupancy_sum / summaries.len().max(1) as f64);
    state.metrics.record_report();

    Ok(DashboardReport {
        hotel_id,
        period_days: days,
        metrics: DashboardMetrics {
            total_checkins,
            total_checkouts,
            total_revenue,
            average_occupancy,
            net_occupancy_change: total_checkins - total_checkouts,
        },
        daily_summaries: summaries,
        recent_events,
        generated_at: Utc::now(),
    })
}

/// Per-day occupancy trend with avg/max/min over the range. An empty
/// range yields a zeroed summary rather than a fault.
pub async fn occupancy(
    state: &AppState,
    hotel_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<OccupancyReport, AppError> {
    let summaries = state
        .summary_repo
        .fetch_range(hotel_id, start_date, end_date)
        .await?;

    let trends: Vec<OccupancyPoint> = summaries
        .iter()
        .map(|day| OccupancyPoint {
            date: day.date,
            occupancy_rate: day.occupancy_rate,
            checkins: day.total_checkins,
            checkouts: day.total_checkouts,
        })
        .collect();

    let summary = if summaries.is_empty() {
        OccupancySummary::default()
    } else {
        let sum: f64 = summaries.iter().map(|d| d.occupancy_rate).sum();
        OccupancySummary {
            average_occupancy: round2(sum / summaries.len() as f64),
            max_occupancy: round2(
                summaries
                    .iter()
                    .map(|d| d.occupancy_rate)
                    .fold(f64::MIN, f64::max),
            ),
            min_occupancy: round2(
                summaries
                    .iter()
                    .map(|d| d.occupancy_rate)
                    .fold(f64::MAX, f64::min),
            ),
        }
    };
    state.metrics.record_report();

    Ok(OccupancyReport {
        hotel_id,
        period: ReportPeriod {
            start_date,
            end_date,
            year: None,
            month: None,
        },
        summary,
        trends,
    })
}

/// Revenue buckets over every cached summary for the hotel, grouped by
/// day, ISO week or month.
pub async fn revenue(
    state: &AppState,
    hotel_id: i64,
    period: Option<RevenuePeriod>,
) -> Result<RevenueReport, AppError> {
    let period = period.unwrap_or_default();
    let summaries = state.summary_repo.fetch_all(hotel_id).await?;
    let breakdown = aggregator::group_revenue(&summaries, period);

    let summary = RevenueSummary {
        total_revenue: breakdown.iter().map(|b| b.total_revenue).sum(),
        total_additional_charges: breakdown.iter().map(|b| b.additional_charges).sum(),
        total_checkouts: breakdown.iter().map(|b| b.total_checkouts).sum(),
    };
    state.metrics.record_report();

    Ok(RevenueReport {
        hotel_id,
        period,
        revenue_breakdown: breakdown,
        summary,
    })
}
