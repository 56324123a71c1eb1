//! Rules engine: evaluates a schedule against configured limits and emits
//! typed violations.
//!
//! Every check is a pure function of the classified events plus a settings
//! snapshot. Malformed input never raises; days without matching events
//! simply produce no violations, and no violation is dropped based on
//! severity.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::event::ClassifiedEvent;
use crate::settings::AppSettings;
use crate::thresholds::{level_for, ThresholdSource};
use crate::workload::{metrics_for_day, week_bounds};

/// Weekend days with more than this many work hours draw an advisory.
const WEEKEND_HOURS_NOTICE: f64 = 4.0;

/// Which limit a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    MaxVisitsDay,
    MaxHoursDay,
    MaxHoursWeek,
    ConsecutiveBusyDays,
    WeekendOverwork,
}

impl ViolationKind {
    /// String representation used in JSON output and display.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MaxVisitsDay => "max-visits-day",
            Self::MaxHoursDay => "max-hours-day",
            Self::MaxHoursWeek => "max-hours-week",
            Self::ConsecutiveBusyDays => "consecutive-busy-days",
            Self::WeekendOverwork => "weekend-overwork",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One way the schedule exceeds a configured limit.
///
/// Produced fresh on each evaluation; never diffed against prior results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,
    pub metric: f64,
    pub threshold: f64,
    pub date: Option<NaiveDate>,
}

/// Per-day checks: visit count and clipped work hours against the daily
/// limits. Severity escalates to critical when the limit is exceeded by
/// more than 2 visits / 2 hours.
pub fn check_day(
    events: &[ClassifiedEvent],
    date: NaiveDate,
    settings: &AppSettings,
) -> Vec<RuleViolation> {
    let rules = &settings.rules;
    let metrics = metrics_for_day(date, events, settings);
    let mut violations = Vec::new();

    let visits = metrics.event_count as u32;
    if visits > rules.max_visits_per_day {
        let severity = if visits > rules.max_visits_per_day + 2 {
            Severity::Critical
        } else {
            Severity::Warning
        };
        violations.push(RuleViolation {
            kind: ViolationKind::MaxVisitsDay,
            severity,
            message: format!(
                "{visits} visits on {date} exceed the daily limit of {}",
                rules.max_visits_per_day
            ),
            metric: f64::from(visits),
            threshold: f64::from(rules.max_visits_per_day),
            date: Some(date),
        });
    }

    let hours = metrics.work_minutes as f64 / 60.0;
    if hours > rules.max_hours_per_day {
        let severity = if hours > rules.max_hours_per_day + 2.0 {
            Severity::Critical
        } else {
            Severity::Warning
        };
        violations.push(RuleViolation {
            kind: ViolationKind::MaxHoursDay,
            severity,
            message: format!(
                "{hours:.1} work hours on {date} exceed the daily limit of {} h",
                rules.max_hours_per_day
            ),
            metric: hours,
            threshold: rules.max_hours_per_day,
            date: Some(date),
        });
    }

    violations
}

/// Work hours of the calendar week containing `now` against the weekly
/// limit. Critical when exceeded by more than 10 hours.
fn check_week(
    events: &[ClassifiedEvent],
    settings: &AppSettings,
    now: DateTime<Utc>,
) -> Option<RuleViolation> {
    let rules = &settings.rules;
    let (week_start, week_end) = week_bounds(now.date_naive());
    let work_minutes: i64 = week_start
        .iter_days()
        .take_while(|d| *d <= week_end)
        .map(|d| metrics_for_day(d, events, settings).work_minutes)
        .sum();
    let hours = work_minutes as f64 / 60.0;
    if hours <= rules.max_hours_per_week {
        return None;
    }
    let severity = if hours > rules.max_hours_per_week + 10.0 {
        Severity::Critical
    } else {
        Severity::Warning
    };
    Some(RuleViolation {
        kind: ViolationKind::MaxHoursWeek,
        severity,
        message: format!(
            "{hours:.1} work hours in the week of {week_start} exceed the weekly limit of {} h",
            rules.max_hours_per_week
        ),
        metric: hours,
        threshold: rules.max_hours_per_week,
        date: Some(week_start),
    })
}

/// Running streak state for the consecutive-busy-days fold.
#[derive(Debug, Clone, Copy)]
struct Streak {
    length: u32,
    start: NaiveDate,
}

fn streak_violation(streak: Streak, limit: u32) -> Option<RuleViolation> {
    if streak.length <= limit {
        return None;
    }
    let severity = if streak.length > limit + 2 {
        Severity::Critical
    } else {
        Severity::Warning
    };
    Some(RuleViolation {
        kind: ViolationKind::ConsecutiveBusyDays,
        severity,
        message: format!(
            "{} consecutive busy days starting {} exceed the limit of {limit}",
            streak.length, streak.start
        ),
        metric: f64::from(streak.length),
        threshold: f64::from(limit),
        date: Some(streak.start),
    })
}

/// Consecutive-busy-days detection over the ordered day list.
///
/// A day is busy when the percentage-of-limit mapping of its work hours
/// against the daily cap lands at busy or worse. This deliberately differs
/// from the fixed weekly bands used for aggregate levels; the two modes
/// answer different questions and are kept distinct.
fn check_consecutive_busy_days(
    events: &[ClassifiedEvent],
    start: NaiveDate,
    end: NaiveDate,
    settings: &AppSettings,
) -> Vec<RuleViolation> {
    let rules = &settings.rules;
    let source = ThresholdSource::PercentOfLimit {
        limit_hours: rules.max_hours_per_day,
        warning_percent: settings.warning_threshold_percent,
    };

    let mut violations = Vec::new();
    let mut streak: Option<Streak> = None;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let hours = metrics_for_day(date, events, settings).work_minutes as f64 / 60.0;
        if level_for(hours, &source).is_busy_or_worse() {
            streak = Some(match streak {
                Some(s) => Streak {
                    length: s.length + 1,
                    start: s.start,
                },
                None => Streak {
                    length: 1,
                    start: date,
                },
            });
        } else if let Some(s) = streak.take() {
            violations.extend(streak_violation(s, rules.max_consecutive_busy_days));
        }
    }
    if let Some(s) = streak {
        violations.extend(streak_violation(s, rules.max_consecutive_busy_days));
    }
    violations
}

/// Weekend days in range with more than 4 work hours, as advisories.
fn check_weekends(
    events: &[ClassifiedEvent],
    start: NaiveDate,
    end: NaiveDate,
    settings: &AppSettings,
) -> Vec<RuleViolation> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .filter_map(|date| {
            let hours = metrics_for_day(date, events, settings).work_minutes as f64 / 60.0;
            (hours > WEEKEND_HOURS_NOTICE).then(|| RuleViolation {
                kind: ViolationKind::WeekendOverwork,
                severity: Severity::Info,
                message: format!("{hours:.1} work hours on {}", date.format("%A %Y-%m-%d")),
                metric: hours,
                threshold: WEEKEND_HOURS_NOTICE,
                date: Some(date),
            })
        })
        .collect()
}

/// Evaluate every rule over `[start, end]`, inclusive.
///
/// `now` anchors the weekly-hours check to the calendar week containing it;
/// it is a parameter rather than a clock read so evaluation stays pure.
pub fn evaluate(
    events: &[ClassifiedEvent],
    start: NaiveDate,
    end: NaiveDate,
    settings: &AppSettings,
    now: DateTime<Utc>,
) -> Vec<RuleViolation> {
    let mut violations = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        violations.extend(check_day(events, date, settings));
    }
    violations.extend(check_week(events, settings, now));
    violations.extend(check_consecutive_busy_days(events, start, end, settings));
    if settings.rules.warn_on_weekend_work {
        violations.extend(check_weekends(events, start, end, settings));
    }
    violations
}

/// What-if query: would adding `candidate` to the schedule violate the
/// daily rules on its date? Re-runs `check_day` on the union; mutates
/// nothing.
pub fn would_violate_rules(
    existing: &[ClassifiedEvent],
    candidate: &ClassifiedEvent,
    settings: &AppSettings,
) -> Vec<RuleViolation> {
    let mut combined: Vec<ClassifiedEvent> = existing.to_vec();
    combined.push(candidate.clone());
    check_day(&combined, candidate.event.start.date_naive(), settings)
}
