//! Workload aggregation: per-day metrics and week/month summaries.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::duration::duration_for_day;
use crate::event::ClassifiedEvent;
use crate::settings::AppSettings;
use crate::thresholds::{level_for, Period, ThresholdSource, WorkloadLevel};

/// Workload figures for one calendar day.
///
/// Recomputed on demand; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadMetrics {
    pub date: NaiveDate,
    pub work_minutes: i64,
    pub travel_minutes: i64,
    pub total_minutes: i64,
    pub event_count: usize,
    pub level: WorkloadLevel,
}

/// Aggregated figures for a week or month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub work_minutes: i64,
    pub travel_minutes: i64,
    pub total_minutes: i64,
    pub event_count: usize,
    /// The single highest-total day, when any day saw activity.
    pub busiest_day: Option<WorkloadMetrics>,
    pub level: WorkloadLevel,
}

/// Work events overlapping the day, sorted by start time.
fn work_events_for_day<'a>(
    date: NaiveDate,
    events: &'a [ClassifiedEvent],
) -> Vec<&'a ClassifiedEvent> {
    let Some(next) = date.succ_opt() else {
        return Vec::new();
    };
    let day_start = date.and_time(NaiveTime::MIN).and_utc();
    let day_end = next.and_time(NaiveTime::MIN).and_utc();
    let mut day_events: Vec<&ClassifiedEvent> = events
        .iter()
        .filter(|e| e.is_work && e.event.start < day_end && e.event.end > day_start)
        .collect();
    day_events.sort_by_key(|e| e.event.start);
    day_events
}

/// Estimated travel minutes for one day's ordered visits.
///
/// Two legs per visit at the configured per-leg estimate; one leg when the
/// visit shares a location with the immediately preceding visit.
fn estimate_travel_minutes(day_events: &[&ClassifiedEvent], leg_minutes: i64) -> i64 {
    let mut minutes = 0;
    let mut previous_location: Option<&str> = None;
    for event in day_events {
        let location = event.event.location.as_deref();
        let same_place = matches!((location, previous_location), (Some(a), Some(b)) if a == b);
        minutes += if same_place { leg_minutes } else { 2 * leg_minutes };
        previous_location = location;
    }
    minutes
}

/// Workload metrics for one calendar day.
pub fn metrics_for_day(
    date: NaiveDate,
    events: &[ClassifiedEvent],
    settings: &AppSettings,
) -> WorkloadMetrics {
    let day_events = work_events_for_day(date, events);
    let work_minutes: i64 = day_events.iter().map(|e| duration_for_day(e, date)).sum();
    let travel_minutes = if settings.include_travel_time {
        estimate_travel_minutes(&day_events, settings.travel_leg_minutes)
    } else {
        0
    };
    let total_minutes = work_minutes + travel_minutes;
    let level = level_for(
        total_minutes as f64 / 60.0,
        &ThresholdSource::FixedBands(settings.thresholds.daily),
    );
    WorkloadMetrics {
        date,
        work_minutes,
        travel_minutes,
        total_minutes,
        event_count: day_events.len(),
        level,
    }
}

/// Metrics for every day in `[start, end]`, inclusive. Empty when inverted.
pub fn metrics_for_range(
    start: NaiveDate,
    end: NaiveDate,
    events: &[ClassifiedEvent],
    settings: &AppSettings,
) -> Vec<WorkloadMetrics> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| metrics_for_day(d, events, settings))
        .collect()
}

/// Monday through Sunday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date
        .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(date);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    (monday, sunday)
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    (first, last)
}

fn summarize(
    period: Period,
    start: NaiveDate,
    end: NaiveDate,
    events: &[ClassifiedEvent],
    settings: &AppSettings,
) -> PeriodSummary {
    let days = metrics_for_range(start, end, events, settings);
    let work_minutes: i64 = days.iter().map(|d| d.work_minutes).sum();
    let travel_minutes: i64 = days.iter().map(|d| d.travel_minutes).sum();
    let total_minutes = work_minutes + travel_minutes;
    let event_count = days.iter().map(|d| d.event_count).sum();
    let busiest_day = days
        .iter()
        .filter(|d| d.total_minutes > 0)
        .max_by_key(|d| d.total_minutes)
        .cloned();
    let level = level_for(
        total_minutes as f64 / 60.0,
        &ThresholdSource::FixedBands(settings.thresholds.bands(period)),
    );
    PeriodSummary {
        period,
        start,
        end,
        work_minutes,
        travel_minutes,
        total_minutes,
        event_count,
        busiest_day,
        level,
    }
}

/// Summary of the calendar week containing `date`.
pub fn week_summary(
    date: NaiveDate,
    events: &[ClassifiedEvent],
    settings: &AppSettings,
) -> PeriodSummary {
    let (start, end) = week_bounds(date);
    summarize(Period::Weekly, start, end, events, settings)
}

/// Summary of the calendar month containing `date`.
pub fn month_summary(
    date: NaiveDate,
    events: &[ClassifiedEvent],
    settings: &AppSettings,
) -> PeriodSummary {
    let (start, end) = month_bounds(date);
    summarize(Period::Monthly, start, end, events, settings)
}
