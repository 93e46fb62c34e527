use std::sync::Arc;

use backend_domain::ports::{
    AuthorityGateway, EventRepository, HotelRepository, SummaryRepository,
};
use backend_domain::RuntimeConfig;
use tokio::sync::mpsc;

use crate::postprocess::PostProcessJob;
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub summary_repo: Arc<dyn SummaryRepository>,
    pub hotel_repo: Arc<dyn HotelRepository>,
    pub authority: Arc<dyn AuthorityGateway>,
    pub postprocess_tx: mpsc::Sender<PostProcessJob>,
    pub metrics: Arc<Metrics>,
}
