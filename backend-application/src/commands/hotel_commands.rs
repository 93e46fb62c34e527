use chrono::Utc;

use backend_domain::Hotel;

use crate::{AppError, AppState};

/// Registers a hotel at onboarding. The integration credential is kept
/// in storage but stripped from the response.
pub async fn register_hotel(state: &AppState, mut hotel: Hotel) -> Result<Hotel, AppError> {
    validate(&hotel)?;
    let now = Utc::now();
    hotel.created_at = Some(now);
    hotel.updated_at = Some(now);
    state
        .hotel_repo
        .insert(&hotel)
        .await
        .map_err(|err| match err {
            backend_domain::StoreError::Duplicate(_) => {
                AppError::Conflict("Hotel with this ID already exists".to_string())
            }
            other => other.into(),
        })?;
    Ok(hotel.redacted())
}

/// Replaces the descriptive fields of an existing hotel. Creation time
/// and the active flag survive unless the payload changes them.
pub async fn update_hotel(
    state: &AppState,
    hotel_id: i64,
    mut payload: Hotel,
) -> Result<Hotel, AppError> {
    payload.hotel_id = hotel_id;
    validate(&payload)?;
    let existing = state
        .hotel_repo
        .fetch(hotel_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
    payload.created_at = existing.created_at;
    payload.updated_at = Some(Utc::now());
    state.hotel_repo.update(&payload).await?;
    Ok(payload.redacted())
}

fn validate(hotel: &Hotel) -> Result<(), AppError> {
    if hotel.hotel_id <= 0 {
        return Err(AppError::Validation(
            "hotel_id must be a positive integer".to_string(),
        ));
    }
    if hotel.hotel_name.trim().is_empty() {
        return Err(AppError::Validation(
            "hotel_name must not be empty".to_string(),
        ));
    }
    Ok(())
}
