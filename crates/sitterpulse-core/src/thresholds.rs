//! Workload level mapping against configured hour thresholds.
//!
//! Two boundary sources exist side by side: fixed three-tier bands and a
//! percentage-of-limit derivation. They answer different questions ("which
//! band does this week fall in" vs "is today busier than a fraction of the
//! daily cap") and both flow through the same mapping, so the band
//! arithmetic lives in exactly one place.

use serde::{Deserialize, Serialize};

/// Aggregation period a threshold triple applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

/// Discrete workload band.
///
/// Ordering is severity order; `None` applies only to zero-hour inputs and
/// is meant for display layers. The rules engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadLevel {
    None,
    Comfortable,
    Busy,
    High,
    Burnout,
}

impl WorkloadLevel {
    /// Busy or worse. Used by the consecutive-day streak detector.
    pub const fn is_busy_or_worse(&self) -> bool {
        matches!(self, Self::Busy | Self::High | Self::Burnout)
    }
}

/// Three ascending hour boundaries partitioning a period into four bands.
///
/// The mapper assumes `comfortable < busy < high`; enforcing monotonicity
/// is the settings owner's job before values get here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBands {
    pub comfortable: f64,
    pub busy: f64,
    pub high: f64,
}

/// Where the boundaries for one mapping call come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdSource {
    /// An explicitly configured `{comfortable, busy, high}` triple.
    FixedBands(ThresholdBands),
    /// Boundaries derived from a single hour cap:
    /// `comfortable = limit * 0.5`, `busy = limit * warning_percent / 100`,
    /// `high = limit`.
    PercentOfLimit { limit_hours: f64, warning_percent: f64 },
}

impl ThresholdSource {
    fn bands(&self) -> ThresholdBands {
        match *self {
            Self::FixedBands(bands) => bands,
            Self::PercentOfLimit {
                limit_hours,
                warning_percent,
            } => ThresholdBands {
                comfortable: limit_hours * 0.5,
                busy: limit_hours * warning_percent / 100.0,
                high: limit_hours,
            },
        }
    }
}

/// Map an hours figure to a workload level.
///
/// Boundaries are inclusive to the lower band, so a value exactly at a
/// boundary takes the less severe level.
pub fn level_for(hours: f64, source: &ThresholdSource) -> WorkloadLevel {
    if hours <= 0.0 {
        return WorkloadLevel::None;
    }
    let bands = source.bands();
    if hours <= bands.comfortable {
        WorkloadLevel::Comfortable
    } else if hours <= bands.busy {
        WorkloadLevel::Busy
    } else if hours <= bands.high {
        WorkloadLevel::High
    } else {
        WorkloadLevel::Burnout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: ThresholdBands = ThresholdBands {
        comfortable: 4.0,
        busy: 6.0,
        high: 8.0,
    };

    #[test]
    fn zero_and_negative_hours_map_to_none() {
        let source = ThresholdSource::FixedBands(BANDS);
        assert_eq!(level_for(0.0, &source), WorkloadLevel::None);
        assert_eq!(level_for(-1.0, &source), WorkloadLevel::None);
    }

    #[test]
    fn boundaries_are_inclusive_to_the_lower_band() {
        let source = ThresholdSource::FixedBands(BANDS);
        assert_eq!(level_for(4.0, &source), WorkloadLevel::Comfortable);
        assert_eq!(level_for(4.01, &source), WorkloadLevel::Busy);
        assert_eq!(level_for(6.0, &source), WorkloadLevel::Busy);
        assert_eq!(level_for(8.0, &source), WorkloadLevel::High);
        assert_eq!(level_for(8.01, &source), WorkloadLevel::Burnout);
    }

    #[test]
    fn percent_of_limit_derives_the_same_band_shape() {
        let source = ThresholdSource::PercentOfLimit {
            limit_hours: 8.0,
            warning_percent: 80.0,
        };
        // Derived bands: 4.0 / 6.4 / 8.0
        assert_eq!(level_for(4.0, &source), WorkloadLevel::Comfortable);
        assert_eq!(level_for(6.4, &source), WorkloadLevel::Busy);
        assert_eq!(level_for(6.5, &source), WorkloadLevel::High);
        assert_eq!(level_for(9.0, &source), WorkloadLevel::Burnout);
    }

    #[test]
    fn severity_ordering() {
        assert!(WorkloadLevel::Comfortable < WorkloadLevel::Busy);
        assert!(WorkloadLevel::Busy < WorkloadLevel::High);
        assert!(WorkloadLevel::High < WorkloadLevel::Burnout);
        assert!(!WorkloadLevel::Comfortable.is_busy_or_worse());
        assert!(WorkloadLevel::Burnout.is_busy_or_worse());
    }
}
