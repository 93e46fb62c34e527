use std::sync::Arc;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::mpsc;

use backend_application::{AppState, Metrics, PostProcessJob};
use backend_domain::ports::{EventRepository, HotelRepository, SummaryRepository};
use backend_infrastructure::{AppConfig, HttpAuthorityGateway, PostgresRepo};

pub struct AppContext {
    pub state: AppState,
    pub postprocess_rx: mpsc::Receiver<PostProcessJob>,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .connect(&db_config.database_url)
            .await?;

        let repo = Arc::new(PostgresRepo::new(pool));
        EventRepository::ensure_schema(repo.as_ref()).await?;
        SummaryRepository::ensure_schema(repo.as_ref()).await?;
        HotelRepository::ensure_schema(repo.as_ref()).await?;

        let authority = Arc::new(HttpAuthorityGateway::new(
            runtime_config.authority_sync_url.clone(),
        ));
        let (postprocess_tx, postprocess_rx) =
            mpsc::channel(runtime_config.postprocess_queue_capacity);

        let state = AppState {
            config: runtime_config,
            event_repo: repo.clone(),
            summary_repo: repo.clone(),
            hotel_repo: repo,
            authority,
            postprocess_tx,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self {
            state,
            postprocess_rx,
        })
    }
}
