//! Shared helpers for CLI commands.

use std::error::Error;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use sitterpulse_core::{classify_batch, AppSettings, CalendarEvent, ClassifiedEvent, Config};

/// Load a JSON calendar export (an array of events) and classify it.
pub fn load_events(path: &Path) -> Result<Vec<ClassifiedEvent>, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let events: Vec<CalendarEvent> = serde_json::from_str(&raw)?;
    tracing::debug!(count = events.len(), path = %path.display(), "loaded calendar events");
    Ok(classify_batch(events))
}

/// Current settings snapshot from the config file.
pub fn settings() -> AppSettings {
    Config::load_or_default().settings
}

/// The date span touched by a batch, defaulting to today when empty.
pub fn covered_range(events: &[ClassifiedEvent]) -> (NaiveDate, NaiveDate) {
    let today = Utc::now().date_naive();
    let start = events
        .iter()
        .map(|e| e.event.start.date_naive())
        .min()
        .unwrap_or(today);
    let end = events
        .iter()
        .map(|e| e.event.end.date_naive())
        .max()
        .unwrap_or(today);
    (start, end)
}
