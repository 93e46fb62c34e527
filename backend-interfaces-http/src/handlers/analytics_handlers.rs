use axum::extract::{Path, Query, State};
use axum::Json;

use backend_application::queries::analytics_queries;
use backend_application::AppState;
use backend_domain::{
    DashboardQuery, DashboardReport, OccupancyQuery, OccupancyReport, RevenueQuery, RevenueReport,
};

use crate::error::HttpError;

pub async fn dashboard(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardReport>, HttpError> {
    let report = analytics_queries::dashboard(&state, hotel_id, query.days).await?;
    Ok(Json(report))
}

pub async fn occupancy(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<OccupancyQuery>,
) -> Result<Json<OccupancyReport>, HttpError> {
    if query.end_date < query.start_date {
        return Err(HttpError::BadRequest(
            "end_date must not precede start_date".to_string(),
        ));
    }
    let report =
        analytics_queries::occupancy(&state, hotel_id, query.start_date, query.end_date).await?;
    Ok(Json(report))
}

pub async fn revenue(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueReport>, HttpError> {
    let report = analytics_queries::revenue(&state, hotel_id, query.period).await?;
    Ok(Json(report))
}
