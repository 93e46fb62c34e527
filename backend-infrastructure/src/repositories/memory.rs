// In-memory repositories mirroring the Postgres semantics, used by the
// application-flow tests. The same uniqueness rules apply: one event per
// event_id, one summary per (hotel_id, date), one hotel per hotel_id.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use backend_domain::ports::{
    EventRepository, HotelRepository, SortOrder, StoreError, StoreResult, SummaryRepository,
};
use backend_domain::{ComplianceStatus, DailySummary, EventFilter, EventType, Hotel, HotelEvent};

#[derive(Default)]
pub struct MemoryEventRepo {
    events: RwLock<Vec<HotelEvent>>,
}

#[derive(Default)]
pub struct MemorySummaryRepo {
    summaries: RwLock<HashMap<(i64, NaiveDate), DailySummary>>,
}

#[derive(Default)]
pub struct MemoryHotelRepo {
    hotels: RwLock<HashMap<i64, Hotel>>,
}

fn matches(event: &HotelEvent, filter: &EventFilter) -> bool {
    if let Some(hotel_id) = filter.hotel_id {
        if event.hotel_id != hotel_id {
            return false;
        }
    }
    if let Some(event_type) = filter.event_type {
        if event.event_type != event_type {
            return false;
        }
    }
    if let Some(booking_id) = filter.booking_id {
        if event.booking_id != booking_id {
            return false;
        }
    }
    if let Some(start) = filter.start_date {
        if event.timestamp < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if event.timestamp > end {
            return false;
        }
    }
    true
}

fn sort_events(events: &mut [HotelEvent], order: SortOrder) {
    events.sort_by(|a, b| {
        let key_a = (a.timestamp, a.event_id.as_str());
        let key_b = (b.timestamp, b.event_id.as_str());
        match order {
            SortOrder::Ascending => key_a.cmp(&key_b),
            SortOrder::Descending => key_b.cmp(&key_a),
        }
    });
}

#[async_trait]
impl EventRepository for MemoryEventRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn append(&self, event: &HotelEvent) -> StoreResult<()> {
        let mut events = self.events.write().await;
        if events.iter().any(|e| e.event_id == event.event_id) {
            return Err(StoreError::Duplicate(event.event_id.clone()));
        }
        events.push(event.clone());
        Ok(())
    }

    async fn fetch_by_id(&self, event_id: &str) -> StoreResult<Option<HotelEvent>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.event_id == event_id).cloned())
    }

    async fn query(
        &self,
        filter: &EventFilter,
        page: u32,
        limit: u32,
    ) -> StoreResult<(Vec<HotelEvent>, u64)> {
        let events = self.events.read().await;
        let mut matched: Vec<HotelEvent> = events
            .iter()
            .filter(|e| matches(e, filter))
            .cloned()
            .collect();
        sort_events(&mut matched, SortOrder::Descending);
        let total = matched.len() as u64;
        let offset = (page.max(1) as usize - 1) * limit as usize;
        let pageful: Vec<HotelEvent> = matched
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();
        Ok((pageful, total))
    }

    async fn fetch_range(
        &self,
        hotel_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        order: SortOrder,
    ) -> StoreResult<Vec<HotelEvent>> {
        let events = self.events.read().await;
        let mut matched: Vec<HotelEvent> = events
            .iter()
            .filter(|e| e.hotel_id == hotel_id && e.timestamp >= start && e.timestamp <= end)
            .cloned()
            .collect();
        sort_events(&mut matched, order);
        Ok(matched)
    }

    async fn fetch_by_type(
        &self,
        hotel_id: i64,
        event_type: EventType,
    ) -> StoreResult<Vec<HotelEvent>> {
        let events = self.events.read().await;
        let mut matched: Vec<HotelEvent> = events
            .iter()
            .filter(|e| e.hotel_id == hotel_id && e.event_type == event_type)
            .cloned()
            .collect();
        sort_events(&mut matched, SortOrder::Ascending);
        Ok(matched)
    }

    async fn fetch_recent(&self, hotel_id: i64, limit: u32) -> StoreResult<Vec<HotelEvent>> {
        let events = self.events.read().await;
        let mut matched: Vec<HotelEvent> = events
            .iter()
            .filter(|e| e.hotel_id == hotel_id)
            .cloned()
            .collect();
        sort_events(&mut matched, SortOrder::Descending);
        matched.truncate(limit as usize);
        Ok(matched)
    }

    async fn fetch_with_status(
        &self,
        hotel_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        statuses: &[ComplianceStatus],
    ) -> StoreResult<Vec<HotelEvent>> {
        let events = self.events.read().await;
        let mut matched: Vec<HotelEvent> = events
            .iter()
            .filter(|e| {
                e.hotel_id == hotel_id
                    && e.timestamp >= start
                    && e.timestamp <= end
                    && statuses.contains(&e.compliance_status)
            })
            .cloned()
            .collect();
        sort_events(&mut matched, SortOrder::Ascending);
        Ok(matched)
    }

    async fn mark_processed(
        &self,
        event_id: &str,
        processed_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.event_id == event_id)
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))?;
        event.processed = true;
        event.processed_at.get_or_insert(processed_at);
        Ok(())
    }

    async fn mark_reported(&self, event_id: &str, reported_at: DateTime<Utc>) -> StoreResult<()> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.event_id == event_id)
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))?;
        event.reported_to_authority = true;
        event.authority_report_date.get_or_insert(reported_at);
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl SummaryRepository for MemorySummaryRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn insert(&self, summary: &DailySummary) -> StoreResult<()> {
        let mut summaries = self.summaries.write().await;
        let key = (summary.hotel_id, summary.date);
        if summaries.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "{}:{}",
                summary.hotel_id, summary.date
            )));
        }
        summaries.insert(key, summary.clone());
        Ok(())
    }

    async fn fetch(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<Option<DailySummary>> {
        let summaries = self.summaries.read().await;
        Ok(summaries.get(&(hotel_id, date)).cloned())
    }

    async fn fetch_range(
        &self,
        hotel_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailySummary>> {
        let summaries = self.summaries.read().await;
        let mut matched: Vec<DailySummary> = summaries
            .values()
            .filter(|s| s.hotel_id == hotel_id && s.date >= start && s.date <= end)
            .cloned()
            .collect();
        matched.sort_by_key(|s| s.date);
        Ok(matched)
    }

    async fn fetch_all(&self, hotel_id: i64) -> StoreResult<Vec<DailySummary>> {
        let summaries = self.summaries.read().await;
        let mut matched: Vec<DailySummary> = summaries
            .values()
            .filter(|s| s.hotel_id == hotel_id)
            .cloned()
            .collect();
        matched.sort_by_key(|s| s.date);
        Ok(matched)
    }

    async fn delete(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<()> {
        let mut summaries = self.summaries.write().await;
        summaries
            .remove(&(hotel_id, date))
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("{}:{}", hotel_id, date)))
    }
}

#[async_trait]
impl HotelRepository for MemoryHotelRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn insert(&self, hotel: &Hotel) -> StoreResult<()> {
        let mut hotels = self.hotels.write().await;
        if hotels.contains_key(&hotel.hotel_id) {
            return Err(StoreError::Duplicate(hotel.hotel_id.to_string()));
        }
        hotels.insert(hotel.hotel_id, hotel.clone());
        Ok(())
    }

    async fn fetch(&self, hotel_id: i64) -> StoreResult<Option<Hotel>> {
        let hotels = self.hotels.read().await;
        Ok(hotels.get(&hotel_id).cloned())
    }

    async fn list_active(&self) -> StoreResult<Vec<Hotel>> {
        let hotels = self.hotels.read().await;
        let mut active: Vec<Hotel> = hotels.values().filter(|h| h.is_active).cloned().collect();
        active.sort_by(|a, b| a.hotel_name.cmp(&b.hotel_name));
        Ok(active)
    }

    async fn update(&self, hotel: &Hotel) -> StoreResult<()> {
        let mut hotels = self.hotels.write().await;
        match hotels.get_mut(&hotel.hotel_id) {
            Some(existing) => {
                *existing = hotel.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(hotel.hotel_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    use chrono::{Duration, TimeZone};
    use serde_json::json;
    use tokio::sync::mpsc;

    use backend_application::commands::{hotel_commands, ingest_commands, summary_commands};
    use backend_application::queries::{
        event_queries, hotel_queries, live_status_queries, report_queries,
    };
    use backend_application::{AppState, Metrics, PostProcessJob};
    use backend_domain::ports::{AuthorityGateway, AuthorityReportOutcome};
    use backend_domain::{
        generate_event_id, ComplianceStatus, EventData, IngestPayload, RuntimeConfig,
        SourceSystem,
    };

    use crate::services::authority_gateway::HttpAuthorityGateway;

    use super::*;

    struct DeliveringGateway;

    #[async_trait]
    impl AuthorityGateway for DeliveringGateway {
        async fn report_event(
            &self,
            _event: &HotelEvent,
        ) -> anyhow::Result<AuthorityReportOutcome> {
            Ok(AuthorityReportOutcome::Delivered)
        }
    }

    fn test_config() -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 5,
            default_page_size: 50,
            max_page_size: 500,
            postprocess_queue_capacity: 64,
            postprocess_max_attempts: 3,
            authority_sync_url: None,
        }
    }

    fn make_state(
        authority: Arc<dyn AuthorityGateway>,
    ) -> (AppState, mpsc::Receiver<PostProcessJob>) {
        let (tx, rx) = mpsc::channel(64);
        let state = AppState {
            config: test_config(),
            event_repo: Arc::new(MemoryEventRepo::default()),
            summary_repo: Arc::new(MemorySummaryRepo::default()),
            hotel_repo: Arc::new(MemoryHotelRepo::default()),
            authority,
            postprocess_tx: tx,
            metrics: Arc::new(Metrics::default()),
        };
        (state, rx)
    }

    fn skipping_state() -> (AppState, mpsc::Receiver<PostProcessJob>) {
        make_state(Arc::new(HttpAuthorityGateway::new(None)))
    }

    fn checkout_payload(hotel_id: i64, booking_id: i64, final_bill: f64, ts: &str) -> IngestPayload {
        serde_json::from_value(json!({
            "event_type": "checkout",
            "hotel_id": hotel_id,
            "booking_id": booking_id,
            "guest_nationality": "FR",
            "timestamp": ts,
            "event_data": {"final_bill": final_bill}
        }))
        .unwrap()
    }

    fn raw_event(event_id: &str, hotel_id: i64, ts: DateTime<Utc>) -> HotelEvent {
        HotelEvent {
            event_id: event_id.to_string(),
            event_type: EventType::Checkin,
            hotel_id,
            hotel_name: None,
            room_id: None,
            room_number: None,
            room_type: None,
            booking_id: 1,
            customer_id: None,
            guest_name: None,
            guest_email: None,
            guest_phone: None,
            guest_nationality: None,
            event_data: EventData::from_raw(EventType::Checkin, None).unwrap(),
            source_system: SourceSystem::Pms,
            location: None,
            timestamp: ts,
            processed: false,
            processed_at: None,
            compliance_status: ComplianceStatus::Pending,
            compliance_notes: None,
            reported_to_authority: false,
            authority_report_date: None,
        }
    }

    #[tokio::test]
    async fn ingest_assigns_unique_event_ids() {
        let (state, _rx) = skipping_state();
        let first = ingest_commands::submit_event(
            &state,
            checkout_payload(1, 10, 100.0, "2026-03-01T10:00:00Z"),
        )
        .await
        .unwrap();
        let second = ingest_commands::submit_event(
            &state,
            checkout_payload(1, 11, 200.0, "2026-03-01T11:00:00Z"),
        )
        .await
        .unwrap();
        assert!(first.event_id.starts_with("evt_"));
        assert_ne!(first.event_id, second.event_id);
    }

    #[tokio::test]
    async fn append_rejects_duplicate_event_id() {
        let repo = MemoryEventRepo::default();
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let event = raw_event("evt_1_fixed", 1, ts);
        repo.append(&event).await.unwrap();
        assert!(matches!(
            repo.append(&event).await,
            Err(StoreError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn daily_summary_is_cached_until_recomputed() {
        let (state, _rx) = skipping_state();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        ingest_commands::submit_event(
            &state,
            checkout_payload(7, 10, 250.0, "2026-03-01T10:00:00Z"),
        )
        .await
        .unwrap();

        let first = report_queries::get_or_build_daily_summary(&state, 7, date)
            .await
            .unwrap();
        assert_eq!(first.total_revenue, 250.0);
        assert_eq!(first.total_checkouts, 1);

        // Late event for the same day does not change the cached summary.
        ingest_commands::submit_event(
            &state,
            checkout_payload(7, 11, 100.0, "2026-03-01T18:00:00Z"),
        )
        .await
        .unwrap();
        let cached = report_queries::get_or_build_daily_summary(&state, 7, date)
            .await
            .unwrap();
        assert_eq!(cached.total_revenue, 250.0);
        assert_eq!(cached.generated_at, first.generated_at);

        let rebuilt = summary_commands::recompute_daily_summary(&state, 7, date)
            .await
            .unwrap();
        assert_eq!(rebuilt.total_revenue, 350.0);
        assert_eq!(rebuilt.total_checkouts, 2);
    }

    // Summary repo whose first fetch misses, simulating a concurrent
    // writer landing between the cache check and the insert.
    struct RacingSummaryRepo {
        inner: MemorySummaryRepo,
        first_fetch_done: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl SummaryRepository for RacingSummaryRepo {
        async fn ensure_schema(&self) -> anyhow::Result<()> {
            self.inner.ensure_schema().await
        }

        async fn insert(&self, summary: &DailySummary) -> StoreResult<()> {
            self.inner.insert(summary).await
        }

        async fn fetch(
            &self,
            hotel_id: i64,
            date: NaiveDate,
        ) -> StoreResult<Option<DailySummary>> {
            if !self
                .first_fetch_done
                .swap(true, std::sync::atomic::Ordering::SeqCst)
            {
                return Ok(None);
            }
            self.inner.fetch(hotel_id, date).await
        }

        async fn fetch_range(
            &self,
            hotel_id: i64,
            start: NaiveDate,
            end: NaiveDate,
        ) -> StoreResult<Vec<DailySummary>> {
            self.inner.fetch_range(hotel_id, start, end).await
        }

        async fn fetch_all(&self, hotel_id: i64) -> StoreResult<Vec<DailySummary>> {
            self.inner.fetch_all(hotel_id).await
        }

        async fn delete(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<()> {
            self.inner.delete(hotel_id, date).await
        }
    }

    #[tokio::test]
    async fn summary_insert_race_rereads_the_winner() {
        use backend_domain::services::aggregator;

        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let inner = MemorySummaryRepo::default();
        let mut winner = aggregator::build_daily_summary(
            7,
            date,
            &[],
            Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 0).unwrap(),
        );
        winner.total_checkouts = 7;
        inner.insert(&winner).await.unwrap();

        let (mut state, _rx) = skipping_state();
        state.summary_repo = Arc::new(RacingSummaryRepo {
            inner,
            first_fetch_done: std::sync::atomic::AtomicBool::new(false),
        });

        // The cache check misses, the insert loses to the stored row, and
        // the caller gets the winner's summary unchanged.
        let summary = report_queries::get_or_build_daily_summary(&state, 7, date)
            .await
            .unwrap();
        assert_eq!(summary.total_checkouts, 7);
        assert_eq!(summary.generated_at, winner.generated_at);
    }

    #[tokio::test]
    async fn empty_day_produces_zeroed_summary() {
        let (state, _rx) = skipping_state();
        let date = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
        let summary = report_queries::get_or_build_daily_summary(&state, 3, date)
            .await
            .unwrap();
        assert_eq!(summary.total_checkins, 0);
        assert_eq!(summary.total_checkouts, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.guest_nationalities.is_empty());
        assert_eq!(summary.compliance_score, 100.0);
    }

    #[tokio::test]
    async fn event_listing_paginates() {
        let (state, _rx) = skipping_state();
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        for i in 0..120 {
            let event = raw_event(
                &format!("evt_0_{:04}", i),
                5,
                base + Duration::minutes(i),
            );
            state.event_repo.append(&event).await.unwrap();
        }

        let page = event_queries::list_events(
            &state,
            EventFilter {
                hotel_id: Some(5),
                page: Some(3),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.events.len(), 20);
        assert_eq!(page.pagination.total_records, 120);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.current_page, 3);
        // Newest first across the whole result set.
        assert!(page.events.first().unwrap().timestamp > page.events.last().unwrap().timestamp);
    }

    #[tokio::test]
    async fn get_event_reports_not_found() {
        let (state, _rx) = skipping_state();
        let result = event_queries::get_event(&state, "evt_0_missing").await;
        assert!(matches!(
            result,
            Err(backend_application::AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn postprocess_worker_marks_processed_and_reported() {
        let (state, rx) = make_state(Arc::new(DeliveringGateway));
        tokio::spawn(backend_application::postprocess::run_worker(
            state.clone(),
            rx,
        ));

        let ack = ingest_commands::submit_event(
            &state,
            checkout_payload(2, 30, 80.0, "2026-03-05T09:00:00Z"),
        )
        .await
        .unwrap();

        let mut done = false;
        for _ in 0..100 {
            let event = state
                .event_repo
                .fetch_by_id(&ack.event_id)
                .await
                .unwrap()
                .unwrap();
            if event.processed && event.reported_to_authority {
                assert!(event.processed_at.is_some());
                assert!(event.authority_report_date.is_some());
                done = true;
                break;
            }
            tokio::time::sleep(StdDuration::from_millis(10)).await;
        }
        assert!(done, "event was not post-processed in time");
    }

    #[tokio::test]
    async fn mark_processed_keeps_first_timestamp() {
        let repo = MemoryEventRepo::default();
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        repo.append(&raw_event("evt_1_once", 1, ts)).await.unwrap();

        let first = Utc.with_ymd_and_hms(2026, 3, 1, 13, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2026, 3, 1, 14, 0, 0).unwrap();
        repo.mark_processed("evt_1_once", first).await.unwrap();
        repo.mark_processed("evt_1_once", second).await.unwrap();

        let event = repo.fetch_by_id("evt_1_once").await.unwrap().unwrap();
        assert!(event.processed);
        assert_eq!(event.processed_at, Some(first));
    }

    #[tokio::test]
    async fn hotel_registration_conflicts_and_redacts() {
        let (state, _rx) = skipping_state();
        let hotel: Hotel = serde_json::from_value(json!({
            "hotel_id": 9,
            "hotel_name": "Harbor View",
            "api_settings": {"api_key": "secret-key", "sync_enabled": true}
        }))
        .unwrap();

        let registered = hotel_commands::register_hotel(&state, hotel.clone())
            .await
            .unwrap();
        assert_eq!(registered.api_settings.unwrap().api_key, None);

        let again = hotel_commands::register_hotel(&state, hotel).await;
        assert!(matches!(
            again,
            Err(backend_application::AppError::Conflict(_))
        ));

        let fetched = hotel_queries::get_hotel(&state, 9).await.unwrap();
        assert_eq!(fetched.api_settings.unwrap().api_key, None);
    }

    #[tokio::test]
    async fn weekly_report_rolls_up_cached_days() {
        let (state, _rx) = skipping_state();
        let end = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        ingest_commands::submit_event(
            &state,
            checkout_payload(4, 1, 100.0, "2026-03-03T12:00:00Z"),
        )
        .await
        .unwrap();
        ingest_commands::submit_event(
            &state,
            checkout_payload(4, 2, 200.0, "2026-03-05T12:00:00Z"),
        )
        .await
        .unwrap();
        for day in [3, 5] {
            let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
            report_queries::get_or_build_daily_summary(&state, 4, date)
                .await
                .unwrap();
        }

        let report = report_queries::weekly_report(&state, 4, Some(end))
            .await
            .unwrap();
        assert_eq!(report.totals.total_checkouts, 2);
        assert_eq!(report.totals.total_revenue, 300.0);
        assert_eq!(report.daily_breakdown.len(), 2);
        assert_eq!(report.period.start_date, end - Duration::days(6));
    }

    #[tokio::test]
    async fn live_status_uses_latest_room_state() {
        let (state, _rx) = skipping_state();
        let today = Utc::now();
        let earlier = today - Duration::minutes(30);

        let mut dirty = raw_event(&generate_event_id(earlier), 6, earlier);
        dirty.event_type = EventType::RoomStatusChange;
        dirty.room_id = Some(5);
        dirty.event_data = EventData::from_raw(
            EventType::RoomStatusChange,
            Some(json!({"old_status": "occupied", "new_status": "dirty"})),
        )
        .unwrap();
        state.event_repo.append(&dirty).await.unwrap();

        let mut cleaned = raw_event(&generate_event_id(today), 6, today);
        cleaned.event_type = EventType::RoomStatusChange;
        cleaned.room_id = Some(5);
        cleaned.event_data = EventData::from_raw(
            EventType::RoomStatusChange,
            Some(json!({"old_status": "dirty", "new_status": "available"})),
        )
        .unwrap();
        state.event_repo.append(&cleaned).await.unwrap();

        let checkin = raw_event(&generate_event_id(today), 6, today);
        state.event_repo.append(&checkin).await.unwrap();

        let status = live_status_queries::live_status(&state, 6).await.unwrap();
        assert_eq!(status.metrics.checkins_today, 1);
        assert_eq!(status.metrics.net_occupancy_change, 1);
        assert_eq!(status.room_statuses.len(), 1);
        assert_eq!(
            status.room_statuses[0].latest_status.as_deref(),
            Some("available")
        );
    }
}
