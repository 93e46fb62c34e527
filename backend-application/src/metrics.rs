use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_ingested: AtomicU64,
    ingest_errors: AtomicU64,
    postprocess_failures: AtomicU64,
    summaries_built: AtomicU64,
    reports_generated: AtomicU64,
}

impl Metrics {
    pub fn record_ingest(&self) {
        self.events_ingested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ingest_error(&self) {
        self.ingest_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_postprocess_failure(&self) {
        self.postprocess_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_built(&self) {
        self.summaries_built.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_report(&self) {
        self.reports_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let ingested = self.events_ingested.load(Ordering::Relaxed);
        let ingest_errors = self.ingest_errors.load(Ordering::Relaxed);
        let postprocess_failures = self.postprocess_failures.load(Ordering::Relaxed);
        let summaries = self.summaries_built.load(Ordering::Relaxed);
        let reports = self.reports_generated.load(Ordering::Relaxed);

        format!(
            "# TYPE stayline_events_ingested_total counter\n\
stayline_events_ingested_total {}\n\
# TYPE stayline_ingest_errors_total counter\n\
stayline_ingest_errors_total {}\n\
# TYPE stayline_postprocess_failures_total counter\n\
stayline_postprocess_failures_total {}\n\
# TYPE stayline_summaries_built_total counter\n\
stayline_summaries_built_total {}\n\
# TYPE stayline_reports_generated_total counter\n\
stayline_reports_generated_total {}\n",
            ingested, ingest_errors, postprocess_failures, summaries, reports
        )
    }
}
