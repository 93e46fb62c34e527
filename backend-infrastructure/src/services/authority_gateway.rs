use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use backend_domain::ports::{AuthorityGateway, AuthorityReportOutcome};
use backend_domain::HotelEvent;

/// Pushes events to the tourism-authority endpoint as JSON. When no
/// endpoint is configured the gateway reports `Skipped` and the event
/// stays local.
pub struct HttpAuthorityGateway {
    client: reqwest::Client,
    sync_url: Option<String>,
}

impl HttpAuthorityGateway {
    pub fn new(sync_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self { client, sync_url }
    }
}

#[async_trait]
impl AuthorityGateway for HttpAuthorityGateway {
    async fn report_event(&self, event: &HotelEvent) -> anyhow::Result<AuthorityReportOutcome> {
        let Some(url) = &self.sync_url else {
            return Ok(AuthorityReportOutcome::Skipped);
        };

        let response = self.client.post(url).json(event).send().await?;
        response.error_for_status()?;
        debug!(event_id = %event.event_id, "event delivered to authority endpoint");
        Ok(AuthorityReportOutcome::Delivered)
    }
}
