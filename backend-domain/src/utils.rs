// Shared time and identifier helpers

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generates a `evt_<millis>_<random9>` identifier. The random suffix
/// makes collisions astronomically unlikely; the store's uniqueness
/// constraint still enforces the invariant.
pub fn generate_event_id(now: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("evt_{}_{}", now.timestamp_millis(), suffix.to_lowercase())
}

/// UTC day window `[00:00:00.000, 23:59:59.999]` for a calendar day.
/// Day boundaries are UTC process-wide.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default());
    let end = Utc.from_utc_datetime(
        &date
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap_or_default(),
    );
    (start, end)
}

/// First and last calendar day of a month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_month.pred_opt()?))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Grouping key for revenue buckets.
pub fn period_key_daily(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn period_key_weekly(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

pub fn period_key_monthly(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ids_embed_millis_and_random_suffix() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let id = generate_event_id(now);
        assert!(id.starts_with(&format!("evt_{}_", now.timestamp_millis())));
        assert_eq!(id.len(), "evt_".len() + 13 + 1 + 9);
        assert_ne!(generate_event_id(now), id);
    }

    #[test]
    fn day_bounds_cover_the_full_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let (start, end) = day_bounds(date);
        assert_eq!(start.to_rfc3339(), "2026-03-01T00:00:00+00:00");
        assert_eq!(end.timestamp_millis() - start.timestamp_millis(), 86_399_999);
    }

    #[test]
    fn month_bounds_handle_december() {
        let (start, end) = month_bounds(2026, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn weekly_period_key_uses_iso_weeks() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(period_key_weekly(date), "2026-W01");
    }
}
