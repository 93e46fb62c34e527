use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::entities::{DailySummary, EventFilter, Hotel, HotelEvent};
use crate::value_objects::{ComplianceStatus, EventType};

/// Storage-layer failure taxonomy. `Duplicate` is load-bearing: the
/// uniqueness constraints on `event_id` and `(hotel_id, date)` are the
/// correctness backstop for idempotent ingestion and single-writer
/// summary creation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Appends one immutable event. Fails with `Duplicate` when the
    /// event_id is already present; never overwrites.
    async fn append(&self, event: &HotelEvent) -> StoreResult<()>;

    async fn fetch_by_id(&self, event_id: &str) -> StoreResult<Option<HotelEvent>>;

    /// Filtered, offset-paginated query in descending time order.
    /// Returns the page of events plus the total match count.
    async fn query(&self, filter: &EventFilter, page: u32, limit: u32)
        -> StoreResult<(Vec<HotelEvent>, u64)>;

    /// All events for one hotel within `[start, end]`.
    async fn fetch_range(
        &self,
        hotel_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        order: SortOrder,
    ) -> StoreResult<Vec<HotelEvent>>;

    /// All events of one type for one hotel, in ascending time order.
    async fn fetch_by_type(&self, hotel_id: i64, event_type: EventType)
        -> StoreResult<Vec<HotelEvent>>;

    /// Most recent events for one hotel, descending.
    async fn fetch_recent(&self, hotel_id: i64, limit: u32) -> StoreResult<Vec<HotelEvent>>;

    /// Events within a range whose compliance status matches one of
    /// `statuses`, ascending.
    async fn fetch_with_status(
        &self,
        hotel_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        statuses: &[ComplianceStatus],
    ) -> StoreResult<Vec<HotelEvent>>;

    /// Narrow idempotent update of the post-processing flag.
    async fn mark_processed(&self, event_id: &str, processed_at: DateTime<Utc>)
        -> StoreResult<()>;

    /// Records a successful hand-off to the reporting authority.
    async fn mark_reported(&self, event_id: &str, reported_at: DateTime<Utc>)
        -> StoreResult<()>;

    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SummaryRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Inserts a freshly computed summary. `Duplicate` when a summary for
    /// `(hotel_id, date)` already exists — the losing side of a concurrent
    /// first-time computation re-reads the winner.
    async fn insert(&self, summary: &DailySummary) -> StoreResult<()>;

    async fn fetch(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<Option<DailySummary>>;

    /// Summaries for `[start, end]` inclusive, ascending by date.
    async fn fetch_range(
        &self,
        hotel_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailySummary>>;

    /// Every summary for one hotel, ascending by date.
    async fn fetch_all(&self, hotel_id: i64) -> StoreResult<Vec<DailySummary>>;

    /// Removes a cached summary so it can be rebuilt.
    async fn delete(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<()>;
}

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// `Duplicate` when the hotel_id is already registered.
    async fn insert(&self, hotel: &Hotel) -> StoreResult<()>;

    async fn fetch(&self, hotel_id: i64) -> StoreResult<Option<Hotel>>;

    /// Active hotels sorted by name.
    async fn list_active(&self) -> StoreResult<Vec<Hotel>>;

    /// `NotFound` when the hotel_id is absent.
    async fn update(&self, hotel: &Hotel) -> StoreResult<()>;
}
