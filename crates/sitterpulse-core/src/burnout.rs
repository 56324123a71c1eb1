//! Burnout risk scoring.
//!
//! Folds an evaluation's violations and the current week's workload level
//! into a single 0-100 score with a discrete risk level and short
//! human-readable contributing factors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::ClassifiedEvent;
use crate::rules::{RuleViolation, Severity, ViolationKind};
use crate::settings::AppSettings;
use crate::thresholds::WorkloadLevel;
use crate::workload::week_summary;

/// Points per critical violation.
const CRITICAL_POINTS: u32 = 20;
/// Points per warning violation.
const WARNING_POINTS: u32 = 10;
/// Points when the current week maps to the burnout band.
const BURNOUT_WEEK_POINTS: u32 = 25;
/// Points when the current week maps to the high band.
const HIGH_WEEK_POINTS: u32 = 15;
/// Points when any consecutive-busy-days violation is present.
const NO_REST_POINTS: u32 = 15;

/// Discrete burnout risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    fn from_score(score: u32) -> Self {
        if score >= 70 {
            Self::Critical
        } else if score >= 50 {
            Self::High
        } else if score >= 30 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate burnout assessment.
///
/// `violations` is the list the caller passed in, carried through for
/// display; it is not recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutRisk {
    pub level: RiskLevel,
    pub score: u32,
    pub factors: Vec<String>,
    pub violations: Vec<RuleViolation>,
}

/// Score a violation set together with the current week's workload trend.
///
/// Info violations contribute no points but stay visible through the
/// carried violation list.
pub fn assess(
    violations: Vec<RuleViolation>,
    events: &[ClassifiedEvent],
    settings: &AppSettings,
    now: DateTime<Utc>,
) -> BurnoutRisk {
    let mut score: u32 = 0;
    let mut factors = Vec::new();

    let criticals = violations
        .iter()
        .filter(|v| v.severity == Severity::Critical)
        .count() as u32;
    let warnings = violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .count() as u32;

    score += criticals * CRITICAL_POINTS;
    score += warnings * WARNING_POINTS;
    if criticals > 0 {
        factors.push("Multiple critical workload violations".to_string());
    }
    if warnings > 2 {
        factors.push("Several workload warnings".to_string());
    }

    match week_summary(now.date_naive(), events, settings).level {
        WorkloadLevel::Burnout => {
            score += BURNOUT_WEEK_POINTS;
            factors.push("Weekly hours exceed high threshold".to_string());
        }
        WorkloadLevel::High => {
            score += HIGH_WEEK_POINTS;
            factors.push("Heavy weekly schedule".to_string());
        }
        _ => {}
    }

    if violations
        .iter()
        .any(|v| v.kind == ViolationKind::ConsecutiveBusyDays)
    {
        score += NO_REST_POINTS;
        factors.push("Extended periods without rest".to_string());
    }

    let score = score.min(100);
    BurnoutRisk {
        level: RiskLevel::from_score(score),
        score,
        factors,
        violations,
    }
}
