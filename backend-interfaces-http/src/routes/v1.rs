use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    analytics_handlers, hotel_handlers, ops_handlers, report_handlers, tracking_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/tracking/events",
            axum::routing::post(tracking_handlers::submit_event)
                .get(tracking_handlers::list_events),
        )
        .route(
            "/v1/tracking/events/:event_id",
            axum::routing::get(tracking_handlers::get_event),
        )
        .route(
            "/v1/tracking/live-status/:hotel_id",
            axum::routing::get(tracking_handlers::live_status),
        )
        .route(
            "/v1/reports/daily/:hotel_id",
            axum::routing::get(report_handlers::daily_report),
        )
        .route(
            "/v1/reports/daily/:hotel_id/recompute",
            axum::routing::post(report_handlers::recompute_daily_summary),
        )
        .route(
            "/v1/reports/weekly/:hotel_id",
            axum::routing::get(report_handlers::weekly_report),
        )
        .route(
            "/v1/reports/monthly/:hotel_id",
            axum::routing::get(report_handlers::monthly_report),
        )
        .route(
            "/v1/reports/compliance/:hotel_id",
            axum::routing::get(report_handlers::compliance_report),
        )
        .route(
            "/v1/analytics/dashboard/:hotel_id",
            axum::routing::get(analytics_handlers::dashboard),
        )
        .route(
            "/v1/analytics/occupancy/:hotel_id",
            axum::routing::get(analytics_handlers::occupancy),
        )
        .route(
            "/v1/analytics/revenue/:hotel_id",
            axum::routing::get(analytics_handlers::revenue),
        )
        .route(
            "/v1/hotels",
            axum::routing::get(hotel_handlers::list_hotels).post(hotel_handlers::register_hotel),
        )
        .route(
            "/v1/hotels/:hotel_id",
            axum::routing::get(hotel_handlers::get_hotel).put(hotel_handlers::update_hotel),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
