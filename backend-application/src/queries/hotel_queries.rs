use backend_domain::Hotel;

use crate::{AppError, AppState};

/// Active hotels sorted by name, credentials stripped.
pub async fn list_hotels(state: &AppState) -> Result<Vec<Hotel>, AppError> {
    let hotels = state.hotel_repo.list_active().await?;
    Ok(hotels.iter().map(Hotel::redacted).collect())
}

pub async fn get_hotel(state: &AppState, hotel_id: i64) -> Result<Hotel, AppError> {
    let hotel = state
        .hotel_repo
        .fetch(hotel_id)
        .await?
        .filter(|hotel| hotel.is_active)
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
    Ok(hotel.redacted())
}
