use tracing::error;

use backend_domain::{EventFilter, EventPage, HotelEvent, Pagination};

use crate::{AppError, AppState};

/// Filtered event listing, newest first, offset-paginated.
pub async fn list_events(state: &AppState, filter: EventFilter) -> Result<EventPage, AppError> {
    let page = filter.page.unwrap_or(1).max(1);
    let limit = filter
        .limit
        .unwrap_or(state.config.default_page_size)
        .clamp(1, state.config.max_page_size);

    let (events, total) = state
        .event_repo
        .query(&filter, page, limit)
        .await
        .map_err(|err| {
            error!("failed to query events: {}", err);
            AppError::from(err)
        })?;

    Ok(EventPage {
        events,
        pagination: Pagination::new(page, limit, total),
    })
}

pub async fn get_event(state: &AppState, event_id: &str) -> Result<HotelEvent, AppError> {
    state
        .event_repo
        .fetch_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}
