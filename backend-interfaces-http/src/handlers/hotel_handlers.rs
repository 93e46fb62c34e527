use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::hotel_commands;
use backend_application::queries::hotel_queries;
use backend_application::AppState;
use backend_domain::Hotel;

use crate::error::HttpError;

pub async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, HttpError> {
    let hotels = hotel_queries::list_hotels(&state).await?;
    Ok(Json(hotels))
}

pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
) -> Result<Json<Hotel>, HttpError> {
    let hotel = hotel_queries::get_hotel(&state, hotel_id).await?;
    Ok(Json(hotel))
}

pub async fn register_hotel(
    State(state): State<AppState>,
    Json(payload): Json<Hotel>,
) -> Result<(StatusCode, Json<Hotel>), HttpError> {
    let hotel = hotel_commands::register_hotel(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

pub async fn update_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Json(payload): Json<Hotel>,
) -> Result<Json<Hotel>, HttpError> {
    let hotel = hotel_commands::update_hotel(&state, hotel_id, payload).await?;
    Ok(Json(hotel))
}
