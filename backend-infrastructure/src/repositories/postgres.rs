// Postgres-backed repositories.
// Uniqueness constraints on events.event_id and
// daily_summaries(hotel_id, date) carry the idempotency and
// single-writer guarantees; SQLSTATE 23505 surfaces as
// StoreError::Duplicate.

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Postgres, QueryBuilder, Row};

use backend_domain::ports::{
    EventRepository, HotelRepository, SortOrder, StoreError, StoreResult, SummaryRepository,
};
use backend_domain::{
    ApiSettings, ComplianceStatus, DailySummary, EventData, EventFilter, EventType, GeoPoint,
    Hotel, HotelEvent, NationalityCount, RoomStatusBreakdown, RoomTypeInventory, SourceSystem,
};

pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_err(err: sqlx::Error, key: String) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::Duplicate(key);
        }
    }
    StoreError::Backend(err.into())
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.into())
}

fn event_from_row(row: &PgRow) -> anyhow::Result<HotelEvent> {
    let raw_type: String = row.try_get("event_type")?;
    let event_type = EventType::parse(&raw_type)
        .ok_or_else(|| anyhow!("unknown event_type in store: {}", raw_type))?;
    let raw_status: String = row.try_get("compliance_status")?;
    let compliance_status = ComplianceStatus::parse(&raw_status)
        .ok_or_else(|| anyhow!("unknown compliance_status in store: {}", raw_status))?;
    let raw_source: String = row.try_get("source_system")?;
    let source_system = SourceSystem::parse(&raw_source)
        .ok_or_else(|| anyhow!("unknown source_system in store: {}", raw_source))?;
    let event_data_value: Value = row.try_get("event_data")?;
    let event_data = EventData::from_raw(event_type, Some(event_data_value))?;
    let location: Option<GeoPoint> = row
        .try_get::<Option<Value>, _>("location")?
        .map(serde_json::from_value)
        .transpose()?;

    Ok(HotelEvent {
        event_id: row.try_get("event_id")?,
        event_type,
        hotel_id: row.try_get("hotel_id")?,
        hotel_name: row.try_get("hotel_name")?,
        room_id: row.try_get("room_id")?,
        room_number: row.try_get("room_number")?,
        room_type: row.try_get("room_type")?,
        booking_id: row.try_get("booking_id")?,
        customer_id: row.try_get("customer_id")?,
        guest_name: row.try_get("guest_name")?,
        guest_email: row.try_get("guest_email")?,
        guest_phone: row.try_get("guest_phone")?,
        guest_nationality: row.try_get("guest_nationality")?,
        event_data,
        source_system,
        location,
        timestamp: row.try_get("ts")?,
        processed: row.try_get("processed")?,
        processed_at: row.try_get("processed_at")?,
        compliance_status,
        compliance_notes: row.try_get("compliance_notes")?,
        reported_to_authority: row.try_get("reported_to_authority")?,
        authority_report_date: row.try_get("authority_report_date")?,
    })
}

fn summary_from_row(row: &PgRow) -> anyhow::Result<DailySummary> {
    let room_status: RoomStatusBreakdown =
        serde_json::from_value(row.try_get::<Value, _>("room_status")?)?;
    let guest_nationalities: Vec<NationalityCount> =
        serde_json::from_value(row.try_get::<Value, _>("guest_nationalities")?)?;
    let compliance_issues: Vec<String> =
        serde_json::from_value(row.try_get::<Value, _>("compliance_issues")?)?;

    Ok(DailySummary {
        hotel_id: row.try_get("hotel_id")?,
        date: row.try_get("summary_date")?,
        total_checkins: row.try_get("total_checkins")?,
        total_checkouts: row.try_get("total_checkouts")?,
        total_room_changes: row.try_get("total_room_changes")?,
        occupancy_rate: row.try_get("occupancy_rate")?,
        average_stay_duration: row.try_get("average_stay_duration")?,
        total_revenue: row.try_get("total_revenue")?,
        additional_charges: row.try_get("additional_charges")?,
        room_status,
        guest_nationalities,
        compliance_score: row.try_get("compliance_score")?,
        compliance_issues,
        generated_at: row.try_get("generated_at")?,
    })
}

fn hotel_from_row(row: &PgRow) -> anyhow::Result<Hotel> {
    let room_types: Vec<RoomTypeInventory> =
        serde_json::from_value(row.try_get::<Value, _>("room_types")?)?;
    let api_settings: Option<ApiSettings> = row
        .try_get::<Option<Value>, _>("api_settings")?
        .map(serde_json::from_value)
        .transpose()?;

    Ok(Hotel {
        hotel_id: row.try_get("hotel_id")?,
        hotel_name: row.try_get("hotel_name")?,
        hotel_address: row.try_get("hotel_address")?,
        hotel_city: row.try_get("hotel_city")?,
        hotel_country: row.try_get("hotel_country")?,
        hotel_phone: row.try_get("hotel_phone")?,
        hotel_email: row.try_get("hotel_email")?,
        trade_license: row.try_get("trade_license")?,
        tourism_license: row.try_get("tourism_license")?,
        authority_registration: row.try_get("authority_registration")?,
        total_rooms: row.try_get("total_rooms")?,
        room_types,
        api_settings,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

const EVENT_COLUMNS: &str = "event_id, event_type, hotel_id, hotel_name, room_id, room_number, \
room_type, booking_id, customer_id, guest_name, guest_email, guest_phone, guest_nationality, \
event_data, source_system, location, ts, processed, processed_at, compliance_status, \
compliance_notes, reported_to_authority, authority_report_date";

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &EventFilter) {
    if let Some(hotel_id) = filter.hotel_id {
        builder.push(" AND hotel_id = ").push_bind(hotel_id);
    }
    if let Some(event_type) = filter.event_type {
        builder
            .push(" AND event_type = ")
            .push_bind(event_type.as_str());
    }
    if let Some(booking_id) = filter.booking_id {
        builder.push(" AND booking_id = ").push_bind(booking_id);
    }
    if let Some(start) = filter.start_date {
        builder.push(" AND ts >= ").push_bind(start);
    }
    if let Some(end) = filter.end_date {
        builder.push(" AND ts <= ").push_bind(end);
    }
}

#[async_trait]
impl EventRepository for PostgresRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hotel_events (
                event_id TEXT PRIMARY KEY,
                event_type TEXT NOT NULL,
                hotel_id BIGINT NOT NULL,
                hotel_name TEXT,
                room_id BIGINT,
                room_number TEXT,
                room_type TEXT,
                booking_id BIGINT NOT NULL,
                customer_id BIGINT,
                guest_name TEXT,
                guest_email TEXT,
                guest_phone TEXT,
                guest_nationality TEXT,
                event_data JSONB NOT NULL DEFAULT '{}'::jsonb,
                source_system TEXT NOT NULL,
                location JSONB,
                ts TIMESTAMPTZ NOT NULL,
                processed BOOLEAN NOT NULL DEFAULT FALSE,
                processed_at TIMESTAMPTZ,
                compliance_status TEXT NOT NULL DEFAULT 'pending',
                compliance_notes TEXT,
                reported_to_authority BOOLEAN NOT NULL DEFAULT FALSE,
                authority_report_date TIMESTAMPTZ
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_hotel_events_hotel_ts \
             ON hotel_events (hotel_id, ts DESC)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_hotel_events_type_ts \
             ON hotel_events (event_type, ts DESC)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_hotel_events_booking \
             ON hotel_events (booking_id, event_type)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn append(&self, event: &HotelEvent) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO hotel_events (
                event_id, event_type, hotel_id, hotel_name, room_id, room_number,
                room_type, booking_id, customer_id, guest_name, guest_email,
                guest_phone, guest_nationality, event_data, source_system, location,
                ts, processed, processed_at, compliance_status, compliance_notes,
                reported_to_authority, authority_report_date
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                $16, $17, $18, $19, $20, $21, $22, $23
            )
            "#,
        )
        .bind(&event.event_id)
        .bind(event.event_type.as_str())
        .bind(event.hotel_id)
        .bind(&event.hotel_name)
        .bind(event.room_id)
        .bind(&event.room_number)
        .bind(&event.room_type)
        .bind(event.booking_id)
        .bind(event.customer_id)
        .bind(&event.guest_name)
        .bind(&event.guest_email)
        .bind(&event.guest_phone)
        .bind(&event.guest_nationality)
        .bind(event.event_data.to_value())
        .bind(event.source_system.as_str())
        .bind(
            event
                .location
                .as_ref()
                .map(|loc| serde_json::to_value(loc).unwrap_or(Value::Null)),
        )
        .bind(event.timestamp)
        .bind(event.processed)
        .bind(event.processed_at)
        .bind(event.compliance_status.as_str())
        .bind(&event.compliance_notes)
        .bind(event.reported_to_authority)
        .bind(event.authority_report_date)
        .execute(&self.pool)
        .await
        .map_err(|err| map_insert_err(err, event.event_id.clone()))?;
        Ok(())
    }

    async fn fetch_by_id(&self, event_id: &str) -> StoreResult<Option<HotelEvent>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM hotel_events WHERE event_id = $1",
            EVENT_COLUMNS
        ))
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        row.as_ref().map(event_from_row).transpose().map_err(StoreError::Backend)
    }

    async fn query(
        &self,
        filter: &EventFilter,
        page: u32,
        limit: u32,
    ) -> StoreResult<(Vec<HotelEvent>, u64)> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM hotel_events WHERE TRUE",
            EVENT_COLUMNS
        ));
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY ts DESC, event_id DESC LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(offset);
        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        let events = rows
            .iter()
            .map(event_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)?;

        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM hotel_events WHERE TRUE");
        push_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;

        Ok((events, total as u64))
    }

    async fn fetch_range(
        &self,
        hotel_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        order: SortOrder,
    ) -> StoreResult<Vec<HotelEvent>> {
        let direction = match order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };
        let rows = sqlx::query(&format!(
            "SELECT {} FROM hotel_events WHERE hotel_id = $1 AND ts >= $2 AND ts <= $3 \
             ORDER BY ts {}, event_id {}",
            EVENT_COLUMNS, direction, direction
        ))
        .bind(hotel_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(event_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn fetch_by_type(
        &self,
        hotel_id: i64,
        event_type: EventType,
    ) -> StoreResult<Vec<HotelEvent>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM hotel_events WHERE hotel_id = $1 AND event_type = $2 \
             ORDER BY ts ASC, event_id ASC",
            EVENT_COLUMNS
        ))
        .bind(hotel_id)
        .bind(event_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(event_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn fetch_recent(&self, hotel_id: i64, limit: u32) -> StoreResult<Vec<HotelEvent>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM hotel_events WHERE hotel_id = $1 \
             ORDER BY ts DESC, event_id DESC LIMIT $2",
            EVENT_COLUMNS
        ))
        .bind(hotel_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(event_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn fetch_with_status(
        &self,
        hotel_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        statuses: &[ComplianceStatus],
    ) -> StoreResult<Vec<HotelEvent>> {
        let status_values: Vec<&str> = statuses.iter().map(ComplianceStatus::as_str).collect();
        let rows = sqlx::query(&format!(
            "SELECT {} FROM hotel_events WHERE hotel_id = $1 AND ts >= $2 AND ts <= $3 \
             AND compliance_status = ANY($4) ORDER BY ts ASC, event_id ASC",
            EVENT_COLUMNS
        ))
        .bind(hotel_id)
        .bind(start)
        .bind(end)
        .bind(status_values)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(event_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn mark_processed(
        &self,
        event_id: &str,
        processed_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        // COALESCE keeps the first processed_at: the flag is set exactly
        // once and a second concurrent mark is a no-op.
        let result = sqlx::query(
            "UPDATE hotel_events SET processed = TRUE, \
             processed_at = COALESCE(processed_at, $2) WHERE event_id = $1",
        )
        .bind(event_id)
        .bind(processed_at)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(event_id.to_string()));
        }
        Ok(())
    }

    async fn mark_reported(&self, event_id: &str, reported_at: DateTime<Utc>) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE hotel_events SET reported_to_authority = TRUE, \
             authority_report_date = COALESCE(authority_report_date, $2) WHERE event_id = $1",
        )
        .bind(event_id)
        .bind(reported_at)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(event_id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SummaryRepository for PostgresRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS daily_summaries (
                hotel_id BIGINT NOT NULL,
                summary_date DATE NOT NULL,
                total_checkins BIGINT NOT NULL DEFAULT 0,
                total_checkouts BIGINT NOT NULL DEFAULT 0,
                total_room_changes BIGINT NOT NULL DEFAULT 0,
                occupancy_rate DOUBLE PRECISION NOT NULL DEFAULT 0,
                average_stay_duration DOUBLE PRECISION NOT NULL DEFAULT 0,
                total_revenue DOUBLE PRECISION NOT NULL DEFAULT 0,
                additional_charges DOUBLE PRECISION NOT NULL DEFAULT 0,
                room_status JSONB NOT NULL DEFAULT '{}'::jsonb,
                guest_nationalities JSONB NOT NULL DEFAULT '[]'::jsonb,
                compliance_score DOUBLE PRECISION NOT NULL DEFAULT 100,
                compliance_issues JSONB NOT NULL DEFAULT '[]'::jsonb,
                generated_at TIMESTAMPTZ NOT NULL,
                PRIMARY KEY (hotel_id, summary_date)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert(&self, summary: &DailySummary) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_summaries (
                hotel_id, summary_date, total_checkins, total_checkouts,
                total_room_changes, occupancy_rate, average_stay_duration,
                total_revenue, additional_charges, room_status,
                guest_nationalities, compliance_score, compliance_issues,
                generated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(summary.hotel_id)
        .bind(summary.date)
        .bind(summary.total_checkins)
        .bind(summary.total_checkouts)
        .bind(summary.total_room_changes)
        .bind(summary.occupancy_rate)
        .bind(summary.average_stay_duration)
        .bind(summary.total_revenue)
        .bind(summary.additional_charges)
        .bind(serde_json::to_value(&summary.room_status).unwrap_or(Value::Null))
        .bind(serde_json::to_value(&summary.guest_nationalities).unwrap_or(Value::Null))
        .bind(summary.compliance_score)
        .bind(serde_json::to_value(&summary.compliance_issues).unwrap_or(Value::Null))
        .bind(summary.generated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            map_insert_err(err, format!("{}:{}", summary.hotel_id, summary.date))
        })?;
        Ok(())
    }

    async fn fetch(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<Option<DailySummary>> {
        let row = sqlx::query(
            "SELECT * FROM daily_summaries WHERE hotel_id = $1 AND summary_date = $2",
        )
        .bind(hotel_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        row.as_ref()
            .map(summary_from_row)
            .transpose()
            .map_err(StoreError::Backend)
    }

    async fn fetch_range(
        &self,
        hotel_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailySummary>> {
        let rows = sqlx::query(
            "SELECT * FROM daily_summaries WHERE hotel_id = $1 \
             AND summary_date >= $2 AND summary_date <= $3 ORDER BY summary_date ASC",
        )
        .bind(hotel_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(summary_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn fetch_all(&self, hotel_id: i64) -> StoreResult<Vec<DailySummary>> {
        let rows = sqlx::query(
            "SELECT * FROM daily_summaries WHERE hotel_id = $1 ORDER BY summary_date ASC",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(summary_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn delete(&self, hotel_id: i64, date: NaiveDate) -> StoreResult<()> {
        let result = sqlx::query(
            "DELETE FROM daily_summaries WHERE hotel_id = $1 AND summary_date = $2",
        )
        .bind(hotel_id)
        .bind(date)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("{}:{}", hotel_id, date)));
        }
        Ok(())
    }
}

#[async_trait]
impl HotelRepository for PostgresRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hotels (
                hotel_id BIGINT PRIMARY KEY,
                hotel_name TEXT NOT NULL,
                hotel_address TEXT,
                hotel_city TEXT,
                hotel_country TEXT,
                hotel_phone TEXT,
                hotel_email TEXT,
                trade_license TEXT,
                tourism_license TEXT,
                authority_registration TEXT,
                total_rooms INTEGER,
                room_types JSONB NOT NULL DEFAULT '[]'::jsonb,
                api_settings JSONB,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ,
                updated_at TIMESTAMPTZ
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert(&self, hotel: &Hotel) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO hotels (
                hotel_id, hotel_name, hotel_address, hotel_city, hotel_country,
                hotel_phone, hotel_email, trade_license, tourism_license,
                authority_registration, total_rooms, room_types, api_settings,
                is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(hotel.hotel_id)
        .bind(&hotel.hotel_name)
        .bind(&hotel.hotel_address)
        .bind(&hotel.hotel_city)
        .bind(&hotel.hotel_country)
        .bind(&hotel.hotel_phone)
        .bind(&hotel.hotel_email)
        .bind(&hotel.trade_license)
        .bind(&hotel.tourism_license)
        .bind(&hotel.authority_registration)
        .bind(hotel.total_rooms)
        .bind(serde_json::to_value(&hotel.room_types).unwrap_or(Value::Null))
        .bind(
            hotel
                .api_settings
                .as_ref()
                .map(|s| serde_json::to_value(s).unwrap_or(Value::Null)),
        )
        .bind(hotel.is_active)
        .bind(hotel.created_at)
        .bind(hotel.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| map_insert_err(err, hotel.hotel_id.to_string()))?;
        Ok(())
    }

    async fn fetch(&self, hotel_id: i64) -> StoreResult<Option<Hotel>> {
        let row = sqlx::query("SELECT * FROM hotels WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        row.as_ref()
            .map(hotel_from_row)
            .transpose()
            .map_err(StoreError::Backend)
    }

    async fn list_active(&self) -> StoreResult<Vec<Hotel>> {
        let rows = sqlx::query(
            "SELECT * FROM hotels WHERE is_active = TRUE ORDER BY hotel_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter()
            .map(hotel_from_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Backend)
    }

    async fn update(&self, hotel: &Hotel) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE hotels SET
                hotel_name = $2, hotel_address = $3, hotel_city = $4,
                hotel_country = $5, hotel_phone = $6, hotel_email = $7,
                trade_license = $8, tourism_license = $9,
                authority_registration = $10, total_rooms = $11,
                room_types = $12, api_settings = $13, is_active = $14,
                updated_at = $15
            WHERE hotel_id = $1
            "#,
        )
        .bind(hotel.hotel_id)
        .bind(&hotel.hotel_name)
        .bind(&hotel.hotel_address)
        .bind(&hotel.hotel_city)
        .bind(&hotel.hotel_country)
        .bind(&hotel.hotel_phone)
        .bind(&hotel.hotel_email)
        .bind(&hotel.trade_license)
        .bind(&hotel.tourism_license)
        .bind(&hotel.authority_registration)
        .bind(hotel.total_rooms)
        .bind(serde_json::to_value(&hotel.room_types).unwrap_or(Value::Null))
        .bind(
            hotel
                .api_settings
                .as_ref()
                .map(|s| serde_json::to_value(s).unwrap_or(Value::Null)),
        )
        .bind(hotel.is_active)
        .bind(hotel.updated_at)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(hotel.hotel_id.to_string()));
        }
        Ok(())
    }
}
