use axum::extract::{Path, Query, State};
use axum::Json;

use backend_application::commands::summary_commands;
use backend_application::queries::report_queries;
use backend_application::AppState;
use backend_domain::{
    ComplianceReport, ComplianceReportQuery, DailyReport, DailyReportQuery, DailySummary,
    MonthlyReportQuery, PeriodReport, WeeklyReportQuery,
};

use crate::error::HttpError;

pub async fn daily_report(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<DailyReportQuery>,
) -> Result<Json<DailyReport>, HttpError> {
    let report = report_queries::daily_report(&state, hotel_id, query.date).await?;
    Ok(Json(report))
}

pub async fn recompute_daily_summary(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<DailyReportQuery>,
) -> Result<Json<DailySummary>, HttpError> {
    let date = query
        .date
        .ok_or_else(|| HttpError::BadRequest("date is required".to_string()))?;
    let summary = summary_commands::recompute_daily_summary(&state, hotel_id, date).await?;
    Ok(Json(summary))
}

pub async fn weekly_report(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<WeeklyReportQuery>,
) -> Result<Json<PeriodReport>, HttpError> {
    let report = report_queries::weekly_report(&state, hotel_id, query.end_date).await?;
    Ok(Json(report))
}

pub async fn monthly_report(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Json<PeriodReport>, HttpError> {
    let report = report_queries::monthly_report(&state, hotel_id, query.year, query.month).await?;
    Ok(Json(report))
}

pub async fn compliance_report(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(query): Query<ComplianceReportQuery>,
) -> Result<Json<ComplianceReport>, HttpError> {
    if query.end_date < query.start_date {
        return Err(HttpError::BadRequest(
            "end_date must not precede start_date".to_string(),
        ));
    }
    let report =
        report_queries::compliance_report(&state, hotel_id, query.start_date, query.end_date)
            .await?;
    Ok(Json(report))
}
