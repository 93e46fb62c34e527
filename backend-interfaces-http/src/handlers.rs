pub mod analytics_handlers;
pub mod hotel_handlers;
pub mod ops_handlers;
pub mod report_handlers;
pub mod tracking_handlers;
