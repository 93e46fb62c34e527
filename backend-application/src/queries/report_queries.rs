use chrono::{Datelike, Duration, NaiveDate, Utc};
use tracing::debug;

use backend_domain::services::aggregator;
use backend_domain::{
    day_bounds, month_bounds, ComplianceIssue, ComplianceIssueSummary, ComplianceReport,
    DailyReport, DailySummary, PeriodReport, ReportPeriod, SortOrder, StoreError,
};

use crate::{AppError, AppState};

/// Returns the cached summary for `(hotel_id, date)` or computes and
/// persists it from that day's events. An existing summary is returned
/// unchanged even if new events for the date have arrived since — the
/// close-of-day semantic; `recompute_daily_summary` is the correction
/// path. A concurrent first computation is resolved by the storage
/// uniqueness constraint: the loser re-reads the winner's row.
pub async fn get_or_build_daily_summary(
    state: &AppState,
    hotel_id: i64,
    date: NaiveDate,
) -> Result<DailySummary, AppError> {
    if let Some(existing) = state.summary_repo.fetch(hotel_id, date).await? {
        return Ok(existing);
    }

    let (start, end) = day_bounds(date);
    let events = state
        .event_repo
        .fetch_range(hotel_id, start, end, SortOrder::Ascending)
        .await?;
    let summary = aggregator::build_daily_summary(hotel_id, date, &events, Utc::now());

    match state.summary_repo.insert(&summary).await {
        Ok(()) => {
            state.metrics.record_summary_built();
            Ok(summary)
        }
        Err(StoreError::Duplicate(_)) => {
            debug!(hotel_id, %date, "summary raced, re-reading winner");
            state
                .summary_repo
                .fetch(hotel_id, date)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "summary vanished after duplicate-key insert"
                    ))
                })
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn daily_report(
    state: &AppState,
    hotel_id: i64,
    date: Option<NaiveDate>,
) -> Result<DailyReport, AppError> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let summary = get_or_build_daily_summary(state, hotel_id, date).await?;
    state.metrics.record_report();
    Ok(DailyReport {
        hotel_id,
        date,
        generated_at: summary.generated_at,
        summary,
    })
}

/// Seven-day rollup ending at `end_date` (default today). Only days that
/// already have a summary contribute; the mean runs over those days.
pub async fn weekly_report(
    state: &AppState,
    hotel_id: i64,
    end_date: Option<NaiveDate>,
) -> Result<PeriodReport, AppError> {
    let end = end_date.unwrap_or_else(|| Utc::now().date_naive());
    let start = end - Duration::days(6);

    let summaries = state.summary_repo.fetch_range(hotel_id, start, end).await?;
    let totals = aggregator::rollup(&summaries);
    state.metrics.record_report();

    Ok(PeriodReport {
        hotel_id,
        period: ReportPeriod {
            start_date: start,
            end_date: end,
            year: None,
            month: None,
        },
        totals,
        compliance_summary: None,
        daily_breakdown: summaries,
        generated_at: Utc::now(),
    })
}

/// Monthly rollup plus the compliance-issue enrichment (events flagged
/// non_compliant or review_required during the month).
pub async fn monthly_report(
    state: &AppState,
    hotel_id: i64,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<PeriodReport, AppError> {
    let today = Utc::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());
    let (start, end) = month_bounds(year, month)
        .ok_or_else(|| AppError::Validation(format!("invalid year/month: {}/{}", year, month)))?;

    let summaries = state.summary_repo.fetch_range(hotel_id, start, end).await?;
    let totals = aggregator::rollup(&summaries);

    let (range_start, _) = day_bounds(start);
    let (_, range_end) = day_bounds(end);
    let issues = state
        .event_repo
        .fetch_with_status(
            hotel_id,
            range_start,
            range_end,
            &[
                backend_domain::ComplianceStatus::NonCompliant,
                backend_domain::ComplianceStatus::ReviewRequired,
            ],
        )
        .await?;
    let issues: Vec<ComplianceIssue> = issues
        .into_iter()
        .map(|event| ComplianceIssue {
            event_id: event.event_id,
            event_type: event.event_type,
            compliance_status: event.compliance_status,
            compliance_notes: event.compliance_notes,
            timestamp: event.timestamp,
        })
        .collect();
    state.metrics.record_report();

    Ok(PeriodReport {
        hotel_id,
        period: ReportPeriod {
            start_date: start,
            end_date: end,
            year: Some(year),
            month: Some(month),
        },
        totals,
        compliance_summary: Some(ComplianceIssueSummary {
            total_issues: issues.len(),
            issues,
        }),
        daily_breakdown: summaries,
        generated_at: Utc::now(),
    })
}

/// Regulatory-format report over raw events (not summaries), ascending
/// by time, with the full matched event list embedded. Callers are
/// expected to bound the range.
pub async fn compliance_report(
    state: &AppState,
    hotel_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<ComplianceReport, AppError> {
    let (start, _) = day_bounds(start_date);
    let (_, end) = day_bounds(end_date);
    let events = state
        .event_repo
        .fetch_range(hotel_id, start, end, SortOrder::Ascending)
        .await?;
    state.metrics.record_report();

    Ok(ComplianceReport {
        hotel_id,
        report_period: ReportPeriod {
            start_date,
            end_date,
            year: None,
            month: None,
        },
        summary: aggregator::event_type_breakdown(&events),
        guest_statistics: aggregator::guest_statistics(&events),
        compliance_summary: aggregator::compliance_breakdown(&events),
        detailed_events: events,
        generated_at: Utc::now(),
    })
}
