use async_trait::async_trait;

use crate::entities::HotelEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityReportOutcome {
    Delivered,
    /// No outward sync configured; nothing was sent.
    Skipped,
}

/// Outward hand-off of events to the tourism-authority backend.
/// Injected so the core never hard-wires a network call.
#[async_trait]
pub trait AuthorityGateway: Send + Sync {
    async fn report_event(&self, event: &HotelEvent) -> anyhow::Result<AuthorityReportOutcome>;
}
