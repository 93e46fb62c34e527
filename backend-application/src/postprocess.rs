// Asynchronous post-processing of ingested events.
// Submit enqueues a job and returns; this worker marks the event
// processed and hands it to the authority gateway. Failures retry up to
// the configured attempt cap, then are logged as permanent — the
// original write is never rolled back.

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use backend_domain::AuthorityReportOutcome;

use crate::AppState;

#[derive(Debug, Clone)]
pub struct PostProcessJob {
    pub event_id: String,
    pub attempt: u32,
}

impl PostProcessJob {
    pub fn new(event_id: String) -> Self {
        Self {
            event_id,
            attempt: 1,
        }
    }
}

pub async fn run_worker(state: AppState, mut rx: mpsc::Receiver<PostProcessJob>) {
    info!("post-processing worker started");
    while let Some(job) = rx.recv().await {
        if let Err(err) = process_job(&state, &job).await {
            if job.attempt < state.config.postprocess_max_attempts {
                warn!(
                    event_id = %job.event_id,
                    attempt = job.attempt,
                    "post-processing failed, retrying: {}",
                    err
                );
                let retry = PostProcessJob {
                    event_id: job.event_id,
                    attempt: job.attempt + 1,
                };
                if state.postprocess_tx.try_send(retry).is_err() {
                    state.metrics.record_postprocess_failure();
                    error!("post-processing queue full, dropping retry");
                }
            } else {
                state.metrics.record_postprocess_failure();
                error!(
                    event_id = %job.event_id,
                    attempts = job.attempt,
                    "post-processing permanently failed: {}",
                    err
                );
            }
        }
    }
    info!("post-processing worker stopped");
}

async fn process_job(state: &AppState, job: &PostProcessJob) -> anyhow::Result<()> {
    let now = Utc::now();
    state.event_repo.mark_processed(&job.event_id, now).await?;

    let Some(event) = state.event_repo.fetch_by_id(&job.event_id).await? else {
        // Marked above, so this cannot happen unless the row vanished.
        warn!(event_id = %job.event_id, "event disappeared during post-processing");
        return Ok(());
    };

    match state.authority.report_event(&event).await? {
        AuthorityReportOutcome::Delivered => {
            state.event_repo.mark_reported(&job.event_id, Utc::now()).await?;
            debug!(event_id = %job.event_id, "event reported to authority");
        }
        AuthorityReportOutcome::Skipped => {
            debug!(event_id = %job.event_id, "authority sync not configured, skipped");
        }
    }
    Ok(())
}
