use chrono::NaiveDate;

use backend_domain::DailySummary;

use crate::queries::report_queries;
use crate::{AppError, AppState};

/// Explicit correction point for the close-of-day semantic: drops the
/// cached summary and rebuilds it from the event log, picking up any
/// late-arriving events for that date.
pub async fn recompute_daily_summary(
    state: &AppState,
    hotel_id: i64,
    date: NaiveDate,
) -> Result<DailySummary, AppError> {
    match state.summary_repo.delete(hotel_id, date).await {
        Ok(()) => {}
        Err(backend_domain::StoreError::NotFound(_)) => {}
        Err(err) => return Err(err.into()),
    }
    report_queries::get_or_build_daily_summary(state, hotel_id, date).await
}
