// Aggregation over the event log.
// Everything here is pure: callers fetch events/summaries through the
// repository ports and hand them in, which keeps the arithmetic testable
// without storage.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    ComplianceBreakdown, DailySummary, EventTypeBreakdown, GuestStatistics, HotelEvent,
    LiveMetrics, NationalityCount, PeriodTotals, RevenueBucket, RevenuePeriod,
    RoomStatusSnapshot,
};
use crate::utils::{period_key_daily, period_key_monthly, period_key_weekly, round2};
use crate::value_objects::{ComplianceStatus, EventType};

/// Computes the daily summary for one hotel from that day's events.
///
/// Revenue sums `final_bill` over checkout events (missing bill counts
/// as 0); additional charges sum each checkout's itemized charges. The
/// nationality histogram spans all of the day's events, not just
/// checkouts, to capture the day's full foot-traffic. Occupancy rate and
/// average stay duration stay at 0 until room inventory is available.
pub fn build_daily_summary(
    hotel_id: i64,
    date: NaiveDate,
    events: &[HotelEvent],
    generated_at: DateTime<Utc>,
) -> DailySummary {
    let mut checkins = 0i64;
    let mut checkouts = 0i64;
    let mut room_changes = 0i64;
    let mut total_revenue = 0.0f64;
    let mut additional_charges = 0.0f64;

    for event in events {
        match event.event_type {
            EventType::Checkin => checkins += 1,
            EventType::Checkout => {
                checkouts += 1;
                if let Some(data) = event.event_data.as_checkout() {
                    total_revenue += data.final_bill.unwrap_or(0.0);
                    additional_charges +=
                        data.additional_charges.iter().map(|c| c.amount).sum::<f64>();
                }
            }
            EventType::RoomChange => room_changes += 1,
            _ => {}
        }
    }

    DailySummary {
        hotel_id,
        date,
        total_checkins: checkins,
        total_checkouts: checkouts,
        total_room_changes: room_changes,
        occupancy_rate: 0.0,
        average_stay_duration: 0.0,
        total_revenue,
        additional_charges,
        room_status: Default::default(),
        guest_nationalities: nationality_histogram(events),
        compliance_score: 100.0,
        compliance_issues: Vec::new(),
        generated_at,
    }
}

/// Sums counts and revenue across summaries and averages the rate
/// fields. The empty set divides by 1, not 0.
pub fn rollup(summaries: &[DailySummary]) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for day in summaries {
        totals.total_checkins += day.total_checkins;
        totals.total_checkouts += day.total_checkouts;
        totals.total_room_changes += day.total_room_changes;
        totals.total_revenue += day.total_revenue;
        totals.additional_charges += day.additional_charges;
        totals.average_occupancy_rate += day.occupancy_rate;
        totals.average_stay_duration += day.average_stay_duration;
    }
    let day_count = summaries.len().max(1) as f64;
    totals.average_occupancy_rate /= day_count;
    totals.average_stay_duration /= day_count;
    totals
}

/// Count of `guest_nationality` occurrences, largest first (country name
/// breaks ties so the output is deterministic).
pub fn nationality_histogram(events: &[HotelEvent]) -> Vec<NationalityCount> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for event in events {
        if let Some(nationality) = event.guest_nationality.as_deref() {
            *counts.entry(nationality).or_default() += 1;
        }
    }
    let mut histogram: Vec<NationalityCount> = counts
        .into_iter()
        .map(|(country, count)| NationalityCount {
            country: country.to_string(),
            count,
        })
        .collect();
    histogram.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    histogram
}

pub fn event_type_breakdown(events: &[HotelEvent]) -> EventTypeBreakdown {
    EventTypeBreakdown {
        total_checkins: events
            .iter()
            .filter(|e| e.event_type == EventType::Checkin)
            .count(),
        total_checkouts: events
            .iter()
            .filter(|e| e.event_type == EventType::Checkout)
            .count(),
        total_room_changes: events
            .iter()
            .filter(|e| e.event_type == EventType::RoomChange)
            .count(),
    }
}

pub fn guest_statistics(events: &[HotelEvent]) -> GuestStatistics {
    let mut guests: Vec<i64> = events.iter().filter_map(|e| e.customer_id).collect();
    guests.sort_unstable();
    guests.dedup();
    GuestStatistics {
        unique_guests: guests.len(),
        total_guest_interactions: events.len(),
        nationalities: nationality_histogram(events),
    }
}

/// Compliance-status counts plus the compliant/total rate as a
/// percentage rounded to 2 decimals. Zero events yields `None`, never a
/// division fault.
pub fn compliance_breakdown(events: &[HotelEvent]) -> ComplianceBreakdown {
    let total = events.len();
    let compliant = events
        .iter()
        .filter(|e| e.compliance_status == ComplianceStatus::Compliant)
        .count();
    let non_compliant = events
        .iter()
        .filter(|e| e.compliance_status == ComplianceStatus::NonCompliant)
        .count();
    let pending_review = events
        .iter()
        .filter(|e| e.compliance_status == ComplianceStatus::ReviewRequired)
        .count();
    let compliance_rate = if total == 0 {
        None
    } else {
        Some(round2(compliant as f64 / total as f64 * 100.0))
    };
    ComplianceBreakdown {
        total_events: total,
        compliant_events: compliant,
        non_compliant_events: non_compliant,
        pending_review,
        compliance_rate,
    }
}

pub fn live_metrics(today_events: &[HotelEvent]) -> LiveMetrics {
    let breakdown = event_type_breakdown(today_events);
    LiveMetrics {
        checkins_today: breakdown.total_checkins as i64,
        checkouts_today: breakdown.total_checkouts as i64,
        room_changes_today: breakdown.total_room_changes as i64,
        net_occupancy_change: breakdown.total_checkins as i64 - breakdown.total_checkouts as i64,
    }
}

/// Last-write-wins reduction over `room_status_change` events: one
/// snapshot per room carrying its most recent status. On exactly equal
/// timestamps the larger event_id wins, which is deterministic and
/// approximates insertion order since ids embed creation millis.
pub fn latest_room_statuses(events: &[HotelEvent]) -> Vec<RoomStatusSnapshot> {
    let mut latest: HashMap<i64, &HotelEvent> = HashMap::new();
    for event in events {
        if event.event_type != EventType::RoomStatusChange {
            continue;
        }
        let Some(room_id) = event.room_id else {
            continue;
        };
        match latest.get(&room_id) {
            Some(current)
                if (current.timestamp, current.event_id.as_str())
                    >= (event.timestamp, event.event_id.as_str()) => {}
            _ => {
                latest.insert(room_id, event);
            }
        }
    }
    let mut snapshots: Vec<RoomStatusSnapshot> = latest
        .into_iter()
        .map(|(room_id, event)| RoomStatusSnapshot {
            room_id,
            room_number: event.room_number.clone(),
            latest_status: event
                .event_data
                .as_room_status_change()
                .and_then(|data| data.new_status.clone()),
            timestamp: event.timestamp,
        })
        .collect();
    snapshots.sort_by_key(|s| s.room_id);
    snapshots
}

/// Groups summaries into revenue buckets keyed by day, ISO week or
/// month. `revenue_per_checkout` is left out for zero-checkout buckets.
pub fn group_revenue(summaries: &[DailySummary], period: RevenuePeriod) -> Vec<RevenueBucket> {
    let mut buckets: HashMap<String, RevenueBucket> = HashMap::new();
    for day in summaries {
        let key = match period {
            RevenuePeriod::Daily => period_key_daily(day.date),
            RevenuePeriod::Weekly => period_key_weekly(day.date),
            RevenuePeriod::Monthly => period_key_monthly(day.date),
        };
        let bucket = buckets.entry(key.clone()).or_insert_with(|| RevenueBucket {
            period_key: key,
            total_revenue: 0.0,
            additional_charges: 0.0,
            total_checkins: 0,
            total_checkouts: 0,
            revenue_per_checkout: None,
        });
        bucket.total_revenue += day.total_revenue;
        bucket.additional_charges += day.additional_charges;
        bucket.total_checkins += day.total_checkins;
        bucket.total_checkouts += day.total_checkouts;
    }
    let mut breakdown: Vec<RevenueBucket> = buckets.into_values().collect();
    for bucket in &mut breakdown {
        if bucket.total_checkouts > 0 {
            bucket.revenue_per_checkout =
                Some(round2(bucket.total_revenue / bucket.total_checkouts as f64));
        }
    }
    breakdown.sort_by(|a, b| a.period_key.cmp(&b.period_key));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AdditionalCharge, CheckoutData, EventData, RoomStatusChangeData};
    use crate::utils::day_bounds;
    use crate::value_objects::SourceSystem;
    use chrono::{Duration, TimeZone};

    fn event(event_type: EventType, timestamp: DateTime<Utc>) -> HotelEvent {
        HotelEvent {
            event_id: format!("evt_{}_testsuffix", timestamp.timestamp_millis()),
            event_type,
            hotel_id: 1,
            hotel_name: None,
            room_id: None,
            room_number: None,
            room_type: None,
            booking_id: 10,
            customer_id: None,
            guest_name: None,
            guest_email: None,
            guest_phone: None,
            guest_nationality: None,
            event_data: EventData::from_raw(event_type, None).unwrap(),
            source_system: SourceSystem::Pms,
            location: None,
            timestamp,
            processed: false,
            processed_at: None,
            compliance_status: ComplianceStatus::Pending,
            compliance_notes: None,
            reported_to_authority: false,
            authority_report_date: None,
        }
    }

    fn checkout(timestamp: DateTime<Utc>, final_bill: Option<f64>, charges: Vec<f64>) -> HotelEvent {
        let mut e = event(EventType::Checkout, timestamp);
        e.event_data = EventData::Checkout(CheckoutData {
            final_bill,
            additional_charges: charges
                .into_iter()
                .map(|amount| AdditionalCharge {
                    description: None,
                    amount,
                })
                .collect(),
            ..Default::default()
        });
        e
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn daily_summary_counts_and_revenue() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let events = vec![
            event(EventType::Checkin, noon()),
            event(EventType::Checkin, noon()),
            checkout(noon(), Some(100.0), vec![]),
            checkout(noon(), Some(150.0), vec![20.0, 5.0]),
            checkout(noon(), None, vec![]),
            event(EventType::RoomChange, noon()),
        ];
        let summary = build_daily_summary(1, date, &events, noon());
        assert_eq!(summary.total_checkins, 2);
        assert_eq!(summary.total_checkouts, 3);
        assert_eq!(summary.total_room_changes, 1);
        assert_eq!(summary.total_revenue, 250.0);
        assert_eq!(summary.additional_charges, 25.0);
        assert_eq!(summary.occupancy_rate, 0.0);
        assert_eq!(summary.average_stay_duration, 0.0);
    }

    #[test]
    fn daily_summary_for_empty_day_is_all_zeroes() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let summary = build_daily_summary(1, date, &[], noon());
        assert_eq!(summary.total_checkins, 0);
        assert_eq!(summary.total_checkouts, 0);
        assert_eq!(summary.total_room_changes, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.guest_nationalities.is_empty());
    }

    #[test]
    fn nationality_histogram_spans_all_event_types() {
        let mut checkin = event(EventType::Checkin, noon());
        checkin.guest_nationality = Some("FR".to_string());
        let mut booking = event(EventType::BookingCreated, noon());
        booking.guest_nationality = Some("FR".to_string());
        let mut checkout_event = checkout(noon(), Some(10.0), vec![]);
        checkout_event.guest_nationality = Some("JP".to_string());

        let histogram = nationality_histogram(&[checkin, booking, checkout_event]);
        assert_eq!(
            histogram,
            vec![
                NationalityCount {
                    country: "FR".to_string(),
                    count: 2
                },
                NationalityCount {
                    country: "JP".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn rollup_sums_counts_and_averages_rates() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut a = build_daily_summary(1, date, &[], noon());
        a.total_checkins = 2;
        a.total_revenue = 100.0;
        a.occupancy_rate = 40.0;
        let mut b = a.clone();
        b.total_checkins = 3;
        b.total_revenue = 200.0;
        b.occupancy_rate = 60.0;

        let totals = rollup(&[a, b]);
        assert_eq!(totals.total_checkins, 5);
        assert_eq!(totals.total_revenue, 300.0);
        assert_eq!(totals.average_occupancy_rate, 50.0);
    }

    #[test]
    fn rollup_of_nothing_is_zero_not_a_fault() {
        let totals = rollup(&[]);
        assert_eq!(totals.total_checkins, 0);
        assert_eq!(totals.average_occupancy_rate, 0.0);
    }

    #[test]
    fn compliance_rate_rounds_to_two_decimals() {
        let mut events: Vec<HotelEvent> = (0..10).map(|_| event(EventType::Checkin, noon())).collect();
        for e in events.iter_mut().take(7) {
            e.compliance_status = ComplianceStatus::Compliant;
        }
        events[7].compliance_status = ComplianceStatus::NonCompliant;
        events[8].compliance_status = ComplianceStatus::ReviewRequired;

        let breakdown = compliance_breakdown(&events);
        assert_eq!(breakdown.total_events, 10);
        assert_eq!(breakdown.compliant_events, 7);
        assert_eq!(breakdown.non_compliant_events, 1);
        assert_eq!(breakdown.pending_review, 1);
        assert_eq!(breakdown.compliance_rate, Some(70.0));

        let third = compliance_breakdown(&events[..3]);
        assert_eq!(third.compliance_rate, Some(100.0));
    }

    #[test]
    fn compliance_rate_of_zero_events_is_none() {
        let breakdown = compliance_breakdown(&[]);
        assert_eq!(breakdown.total_events, 0);
        assert_eq!(breakdown.compliance_rate, None);
    }

    #[test]
    fn guest_statistics_dedupes_customers() {
        let mut a = event(EventType::Checkin, noon());
        a.customer_id = Some(7);
        let mut b = event(EventType::Checkout, noon());
        b.customer_id = Some(7);
        let mut c = event(EventType::BookingCreated, noon());
        c.customer_id = Some(9);
        let d = event(EventType::RoomChange, noon());

        let stats = guest_statistics(&[a, b, c, d]);
        assert_eq!(stats.unique_guests, 2);
        assert_eq!(stats.total_guest_interactions, 4);
    }

    #[test]
    fn room_status_reduction_keeps_the_latest_per_room() {
        let t1 = noon();
        let t2 = t1 + Duration::hours(1);
        let mut dirty = event(EventType::RoomStatusChange, t1);
        dirty.room_id = Some(5);
        dirty.event_data = EventData::RoomStatusChange(RoomStatusChangeData {
            new_status: Some("dirty".to_string()),
            ..Default::default()
        });
        let mut available = event(EventType::RoomStatusChange, t2);
        available.room_id = Some(5);
        available.event_data = EventData::RoomStatusChange(RoomStatusChangeData {
            new_status: Some("available".to_string()),
            ..Default::default()
        });
        let mut other_room = event(EventType::RoomStatusChange, t1);
        other_room.room_id = Some(2);
        other_room.event_data = EventData::RoomStatusChange(RoomStatusChangeData {
            new_status: Some("maintenance".to_string()),
            ..Default::default()
        });

        let snapshots = latest_room_statuses(&[dirty, available, other_room]);
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].room_id, 2);
        assert_eq!(snapshots[1].room_id, 5);
        assert_eq!(snapshots[1].latest_status.as_deref(), Some("available"));
    }

    #[test]
    fn room_status_tie_breaks_on_event_id() {
        let t = noon();
        let mut first = event(EventType::RoomStatusChange, t);
        first.room_id = Some(5);
        first.event_id = "evt_1_aaaaaaaaa".to_string();
        first.event_data = EventData::RoomStatusChange(RoomStatusChangeData {
            new_status: Some("dirty".to_string()),
            ..Default::default()
        });
        let mut second = event(EventType::RoomStatusChange, t);
        second.room_id = Some(5);
        second.event_id = "evt_1_bbbbbbbbb".to_string();
        second.event_data = EventData::RoomStatusChange(RoomStatusChangeData {
            new_status: Some("available".to_string()),
            ..Default::default()
        });

        // Same input regardless of slice order.
        let forward = latest_room_statuses(&[first.clone(), second.clone()]);
        let backward = latest_room_statuses(&[second, first]);
        assert_eq!(forward[0].latest_status.as_deref(), Some("available"));
        assert_eq!(forward, backward);
    }

    #[test]
    fn live_metrics_net_change() {
        let events = vec![
            event(EventType::Checkin, noon()),
            event(EventType::Checkin, noon()),
            event(EventType::Checkin, noon()),
            event(EventType::Checkout, noon()),
            event(EventType::RoomChange, noon()),
        ];
        let metrics = live_metrics(&events);
        assert_eq!(metrics.checkins_today, 3);
        assert_eq!(metrics.checkouts_today, 1);
        assert_eq!(metrics.room_changes_today, 1);
        assert_eq!(metrics.net_occupancy_change, 2);
    }

    #[test]
    fn revenue_buckets_group_by_month_and_guard_zero_checkouts() {
        let jan = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let feb = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let mut a = build_daily_summary(1, jan, &[], noon());
        a.total_revenue = 100.0;
        a.total_checkouts = 2;
        let mut b = build_daily_summary(1, jan2, &[], noon());
        b.total_revenue = 50.0;
        b.total_checkouts = 1;
        let mut c = build_daily_summary(1, feb, &[], noon());
        c.total_revenue = 80.0;
        c.total_checkouts = 0;

        let buckets = group_revenue(&[a, b, c], RevenuePeriod::Monthly);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period_key, "2026-01");
        assert_eq!(buckets[0].total_revenue, 150.0);
        assert_eq!(buckets[0].revenue_per_checkout, Some(50.0));
        assert_eq!(buckets[1].period_key, "2026-02");
        assert_eq!(buckets[1].revenue_per_checkout, None);
    }

    #[test]
    fn day_bounds_exclude_the_neighbouring_days() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let (start, end) = day_bounds(date);
        let before = start - Duration::milliseconds(1);
        let after = end + Duration::milliseconds(1);
        assert!(before.date_naive() < date);
        assert!(after.date_naive() > date);
    }
}
