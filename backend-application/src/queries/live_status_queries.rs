use chrono::Utc;

use backend_domain::services::aggregator;
use backend_domain::{day_bounds, EventType, LiveStatus, SortOrder};

use crate::{AppError, AppState};

/// Same-day snapshot computed straight from today's events — never from
/// a cached summary, since today is still accumulating. Room statuses
/// come from a last-write-wins reduction over the status-change log.
pub async fn live_status(state: &AppState, hotel_id: i64) -> Result<LiveStatus, AppError> {
    let now = Utc::now();
    let today = now.date_naive();
    let (start, end) = day_bounds(today);

    let today_events = state
        .event_repo
        .fetch_range(hotel_id, start, end, SortOrder::Descending)
        .await?;
    let status_events = state
        .event_repo
        .fetch_by_type(hotel_id, EventType::RoomStatusChange)
        .await?;

    Ok(LiveStatus {
        hotel_id,
        date: today,
        metrics: aggregator::live_metrics(&today_events),
        room_statuses: aggregator::latest_room_statuses(&status_events),
        last_updated: now,
    })
}
