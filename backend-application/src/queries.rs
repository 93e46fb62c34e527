pub mod analytics_queries;
pub mod event_queries;
pub mod hotel_queries;
pub mod live_status_queries;
pub mod report_queries;
