//! Configurable limits and thresholds, read as a snapshot per evaluation.
//!
//! The core never writes settings; it receives an `AppSettings` value from
//! the owning store (the TOML config file, or a caller-built override) and
//! treats it as immutable for the duration of one evaluation.

use serde::{Deserialize, Serialize};

use crate::thresholds::{Period, ThresholdBands};

/// One `ThresholdBands` triple per aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadThresholds {
    #[serde(default = "default_daily_bands")]
    pub daily: ThresholdBands,
    #[serde(default = "default_weekly_bands")]
    pub weekly: ThresholdBands,
    #[serde(default = "default_monthly_bands")]
    pub monthly: ThresholdBands,
}

impl WorkloadThresholds {
    /// Bands for the given period.
    pub const fn bands(&self, period: Period) -> ThresholdBands {
        match period {
            Period::Daily => self.daily,
            Period::Weekly => self.weekly,
            Period::Monthly => self.monthly,
        }
    }
}

/// Hard limits the rules engine evaluates against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadRules {
    #[serde(default = "default_max_visits_per_day")]
    pub max_visits_per_day: u32,
    #[serde(default = "default_max_hours_per_day")]
    pub max_hours_per_day: f64,
    #[serde(default = "default_max_hours_per_week")]
    pub max_hours_per_week: f64,
    #[serde(default = "default_max_consecutive_busy_days")]
    pub max_consecutive_busy_days: u32,
    /// Reserved by the settings schema; no rule consumes it yet.
    #[serde(default = "default_min_break_minutes")]
    pub min_break_minutes: i64,
    #[serde(default = "default_true")]
    pub warn_on_weekend_work: bool,
}

/// Snapshot of everything the analysis engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub include_travel_time: bool,
    /// Fixed per-leg travel estimate in minutes.
    #[serde(default = "default_travel_leg_minutes")]
    pub travel_leg_minutes: i64,
    /// Warning boundary for the percentage-of-limit threshold mode.
    #[serde(default = "default_warning_threshold_percent")]
    pub warning_threshold_percent: f64,
    #[serde(default)]
    pub thresholds: WorkloadThresholds,
    #[serde(default)]
    pub rules: WorkloadRules,
}

// Default functions
fn default_daily_bands() -> ThresholdBands {
    ThresholdBands {
        comfortable: 4.0,
        busy: 6.0,
        high: 8.0,
    }
}
fn default_weekly_bands() -> ThresholdBands {
    ThresholdBands {
        comfortable: 20.0,
        busy: 32.0,
        high: 40.0,
    }
}
fn default_monthly_bands() -> ThresholdBands {
    ThresholdBands {
        comfortable: 80.0,
        busy: 130.0,
        high: 170.0,
    }
}
fn default_max_visits_per_day() -> u32 {
    6
}
fn default_max_hours_per_day() -> f64 {
    8.0
}
fn default_max_hours_per_week() -> f64 {
    40.0
}
fn default_max_consecutive_busy_days() -> u32 {
    5
}
fn default_min_break_minutes() -> i64 {
    30
}
fn default_travel_leg_minutes() -> i64 {
    15
}
fn default_warning_threshold_percent() -> f64 {
    80.0
}
fn default_true() -> bool {
    true
}

impl Default for WorkloadThresholds {
    fn default() -> Self {
        Self {
            daily: default_daily_bands(),
            weekly: default_weekly_bands(),
            monthly: default_monthly_bands(),
        }
    }
}

impl Default for WorkloadRules {
    fn default() -> Self {
        Self {
            max_visits_per_day: default_max_visits_per_day(),
            max_hours_per_day: default_max_hours_per_day(),
            max_hours_per_week: default_max_hours_per_week(),
            max_consecutive_busy_days: default_max_consecutive_busy_days(),
            min_break_minutes: default_min_break_minutes(),
            warn_on_weekend_work: true,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            include_travel_time: true,
            travel_leg_minutes: default_travel_leg_minutes(),
            warning_threshold_percent: default_warning_threshold_percent(),
            thresholds: WorkloadThresholds::default(),
            rules: WorkloadRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ascending() {
        let t = WorkloadThresholds::default();
        for bands in [t.daily, t.weekly, t.monthly] {
            assert!(bands.comfortable < bands.busy);
            assert!(bands.busy < bands.high);
        }
    }

    #[test]
    fn bands_selects_by_period() {
        let t = WorkloadThresholds::default();
        assert_eq!(t.bands(Period::Daily), t.daily);
        assert_eq!(t.bands(Period::Weekly), t.weekly);
        assert_eq!(t.bands(Period::Monthly), t.monthly);
    }

    #[test]
    fn settings_toml_roundtrip_backfills_missing_fields() {
        let partial = "include_travel_time = false\n\n[rules]\nmax_visits_per_day = 4\n";
        let settings: AppSettings = toml::from_str(partial).unwrap();
        assert!(!settings.include_travel_time);
        assert_eq!(settings.rules.max_visits_per_day, 4);
        // Everything not mentioned falls back to defaults.
        assert_eq!(settings.rules.max_consecutive_busy_days, 5);
        assert_eq!(settings.travel_leg_minutes, 15);
        assert_eq!(settings.thresholds.weekly.high, 40.0);
    }
}
