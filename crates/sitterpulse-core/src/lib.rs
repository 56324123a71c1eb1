//! # SitterPulse Core Library
//!
//! Core analysis engine for SitterPulse: turns a pet-sitter's raw calendar
//! into classified visits, workload metrics, rule violations, and a burnout
//! risk score. The CLI binary is a thin layer over this crate.
//!
//! ## Pipeline
//!
//! Data flows one way, each stage a pure function of its inputs plus a
//! settings snapshot:
//!
//! ```text
//! raw events -> classified events -> metrics -> levels/violations -> risk
//! ```
//!
//! ## Key Components
//!
//! - [`classify::classify`]: ordered-pattern work/personal classification
//! - [`duration`]: per-day interval clipping with the overnight cap
//! - [`workload`]: day metrics plus week/month summaries
//! - [`thresholds::level_for`]: hour-to-band mapping for both threshold modes
//! - [`rules::evaluate`]: typed limit violations
//! - [`burnout::assess`]: the aggregate 0-100 risk score

pub mod burnout;
pub mod classify;
pub mod config;
pub mod duration;
pub mod error;
pub mod event;
pub mod rules;
pub mod settings;
pub mod thresholds;
pub mod workload;

pub use burnout::{assess, BurnoutRisk, RiskLevel};
pub use classify::{classify, classify_batch};
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use event::{CalendarEvent, ClassifiedEvent, EventStatus, ServiceInfo, ServiceType};
pub use rules::{check_day, evaluate, would_violate_rules, RuleViolation, Severity, ViolationKind};
pub use settings::{AppSettings, WorkloadRules, WorkloadThresholds};
pub use thresholds::{level_for, Period, ThresholdBands, ThresholdSource, WorkloadLevel};
pub use workload::{
    metrics_for_day, metrics_for_range, month_summary, week_summary, PeriodSummary,
    WorkloadMetrics,
};
