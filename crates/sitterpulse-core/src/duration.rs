//! Per-day and per-range duration computation.
//!
//! Events contribute the intersection of their `[start, end)` span with the
//! queried day or range. Overnight events are capped at 12 hours per call:
//! an overnight stay is not 12 continuous active hours, so it contributes a
//! bounded daily load no matter how long the literal booking is.
//!
//! The cap is per-day. Aggregators must call once per (event, day) pair
//! rather than dividing a total across the days spanned.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::event::ClassifiedEvent;

/// Maximum minutes an overnight event contributes to a single day or range.
pub const OVERNIGHT_DAILY_CAP_MINUTES: i64 = 720;

/// Minutes of the event falling on the given calendar day.
pub fn duration_for_day(event: &ClassifiedEvent, date: NaiveDate) -> i64 {
    let Some(next) = date.succ_opt() else {
        return 0;
    };
    let day_start = date.and_time(NaiveTime::MIN).and_utc();
    let day_end = next.and_time(NaiveTime::MIN).and_utc();
    duration_in_range(event, day_start, day_end)
}

/// Minutes of the event falling inside `[range_start, range_end)`.
///
/// Returns 0 for disjoint or inverted ranges; never negative.
pub fn duration_in_range(
    event: &ClassifiedEvent,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> i64 {
    let clipped_start = event.event.start.max(range_start);
    let clipped_end = event.event.end.min(range_end);
    let minutes = (clipped_end - clipped_start).num_minutes().max(0);
    if event.is_overnight {
        minutes.min(OVERNIGHT_DAILY_CAP_MINUTES)
    } else {
        minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::event::{CalendarEvent, EventStatus};
    use proptest::prelude::*;

    fn classified(title: &str, start: &str, end: &str) -> ClassifiedEvent {
        classify(CalendarEvent {
            id: "e1".to_string(),
            calendar_id: "cal".to_string(),
            title: title.to_string(),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            all_day: false,
            status: EventStatus::Confirmed,
            location: None,
        })
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn event_within_one_day() {
        let e = classified("Fluffy - 30", "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z");
        assert_eq!(duration_for_day(&e, date("2026-03-02")), 30);
        assert_eq!(duration_for_day(&e, date("2026-03-01")), 0);
        assert_eq!(duration_for_day(&e, date("2026-03-03")), 0);
    }

    #[test]
    fn overnight_event_caps_each_day_separately() {
        // 18:00 day 1 through 08:00 day 3 -- 38 hours.
        let e = classified(
            "Housesit Rex",
            "2026-03-02T18:00:00Z",
            "2026-03-04T08:00:00Z",
        );
        assert!(e.is_overnight);
        assert_eq!(duration_for_day(&e, date("2026-03-02")), 360);
        assert_eq!(duration_for_day(&e, date("2026-03-03")), 720);
        assert_eq!(duration_for_day(&e, date("2026-03-04")), 480);
    }

    #[test]
    fn overnight_cap_also_applies_to_arbitrary_ranges() {
        let e = classified(
            "Overnight Bella",
            "2026-03-02T18:00:00Z",
            "2026-03-04T08:00:00Z",
        );
        let range_start = "2026-03-02T00:00:00Z".parse().unwrap();
        let range_end = "2026-03-05T00:00:00Z".parse().unwrap();
        assert_eq!(
            duration_in_range(&e, range_start, range_end),
            OVERNIGHT_DAILY_CAP_MINUTES
        );
    }

    #[test]
    fn inverted_and_disjoint_ranges_yield_zero() {
        let e = classified("Fluffy - 30", "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z");
        let start = "2026-03-02T10:00:00Z".parse().unwrap();
        let end = "2026-03-02T08:00:00Z".parse().unwrap();
        assert_eq!(duration_in_range(&e, start, end), 0);

        let inverted = classified("Fluffy - 30", "2026-03-02T10:00:00Z", "2026-03-02T09:00:00Z");
        assert_eq!(duration_for_day(&inverted, date("2026-03-02")), 0);
    }

    #[test]
    fn midnight_boundary_splits_cleanly() {
        let e = classified("Rex - 60", "2026-03-02T23:30:00Z", "2026-03-03T00:30:00Z");
        assert_eq!(duration_for_day(&e, date("2026-03-02")), 30);
        assert_eq!(duration_for_day(&e, date("2026-03-03")), 30);
    }

    proptest! {
        // For whole-minute events without overnight capping, the per-day
        // contributions sum to exactly the literal duration.
        #[test]
        fn day_sums_equal_literal_duration(
            start_offset_min in 0i64..(14 * 24 * 60),
            duration_min in 1i64..(7 * 24 * 60),
        ) {
            let base: DateTime<Utc> = "2026-03-01T00:00:00Z".parse().unwrap();
            let start = base + chrono::Duration::minutes(start_offset_min);
            let end = start + chrono::Duration::minutes(duration_min);
            let event = ClassifiedEvent {
                event: CalendarEvent {
                    id: "p".to_string(),
                    calendar_id: "cal".to_string(),
                    title: "Rex - 30".to_string(),
                    start,
                    end,
                    all_day: false,
                    status: EventStatus::Confirmed,
                    location: None,
                },
                is_work: true,
                is_overnight: false,
                client_name: Some("Rex".to_string()),
                service: None,
            };

            let mut total = 0;
            let mut day = start.date_naive();
            while day <= end.date_naive() {
                total += duration_for_day(&event, day);
                day = day.succ_opt().unwrap();
            }
            prop_assert_eq!(total, duration_min);
        }
    }
}
