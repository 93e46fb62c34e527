use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::ingest_commands;
use backend_application::queries::{event_queries, live_status_queries};
use backend_application::AppState;
use backend_domain::{EventFilter, EventPage, HotelEvent, IngestAck, IngestPayload, LiveStatus};

use crate::error::HttpError;

pub async fn submit_event(
    State(state): State<AppState>,
    Json(payload): Json<IngestPayload>,
) -> Result<(StatusCode, Json<IngestAck>), HttpError> {
    let ack = ingest_commands::submit_event(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<EventPage>, HttpError> {
    let page = event_queries::list_events(&state, filter).await?;
    Ok(Json(page))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<HotelEvent>, HttpError> {
    let event = event_queries::get_event(&state, &event_id).await?;
    Ok(Json(event))
}

pub async fn live_status(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
) -> Result<Json<LiveStatus>, HttpError> {
    let status = live_status_queries::live_status(&state, hotel_id).await?;
    Ok(Json(status))
}
