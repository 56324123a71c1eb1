//! Calendar event types and classification metadata.
//!
//! `CalendarEvent` is the raw entry as the calendar source delivers it.
//! The classifier enriches it once into a `ClassifiedEvent`; everything
//! downstream treats the enriched value as immutable input.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a calendar entry as reported by the calendar source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Cancelled,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

/// A raw calendar entry.
///
/// Created externally by the calendar source. The core assumes entries are
/// already deduplicated and carry a stable `id`/`calendar_id` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub status: EventStatus,
    /// Free-text location, consumed by the travel estimator.
    #[serde(default)]
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Scheduled length in minutes. Inverted ranges count as zero.
    pub fn scheduled_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }

    /// True if start and end fall on different calendar days.
    pub fn spans_multiple_days(&self) -> bool {
        self.start.date_naive() != self.end.date_naive()
    }
}

/// Kind of service a work event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    DropIn,
    Walk,
    Overnight,
    Housesit,
    MeetGreet,
    NailTrim,
    Other,
}

impl ServiceType {
    /// String representation used in JSON output and display.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DropIn => "drop-in",
            Self::Walk => "walk",
            Self::Overnight => "overnight",
            Self::Housesit => "housesit",
            Self::MeetGreet => "meet-greet",
            Self::NailTrim => "nail-trim",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Service metadata derived from a work event's title.
///
/// Never independently edited; re-derived whenever the event is
/// reclassified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service_type: ServiceType,
    pub duration_minutes: i64,
    pub pet_name: Option<String>,
}

/// A calendar event enriched once by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedEvent {
    pub event: CalendarEvent,
    /// Pet-sitting business activity, as opposed to personal time.
    pub is_work: bool,
    /// Extended stay subject to the 12-hour daily load cap.
    pub is_overnight: bool,
    pub client_name: Option<String>,
    pub service: Option<ServiceInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            id: "e1".to_string(),
            calendar_id: "cal".to_string(),
            title: "Fluffy - 30".to_string(),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            all_day: false,
            status: EventStatus::Confirmed,
            location: None,
        }
    }

    #[test]
    fn scheduled_minutes_floors_inverted_ranges() {
        let e = event("2026-03-02T10:00:00Z", "2026-03-02T09:00:00Z");
        assert_eq!(e.scheduled_minutes(), 0);
    }

    #[test]
    fn spans_multiple_days() {
        let same = event("2026-03-02T09:00:00Z", "2026-03-02T23:00:00Z");
        assert!(!same.spans_multiple_days());

        let multi = event("2026-03-02T18:00:00Z", "2026-03-03T08:00:00Z");
        assert!(multi.spans_multiple_days());
    }

    #[test]
    fn event_serde_roundtrip() {
        let e = event("2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z");
        let json = serde_json::to_string(&e).unwrap();
        let decoded: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, "e1");
        assert_eq!(decoded.status, EventStatus::Confirmed);
    }

    #[test]
    fn optional_fields_default_on_deserialize() {
        let json = r#"{
            "id": "e2",
            "calendar_id": "cal",
            "title": "Walk Rex",
            "start": "2026-03-02T09:00:00Z",
            "end": "2026-03-02T09:30:00Z"
        }"#;
        let decoded: CalendarEvent = serde_json::from_str(json).unwrap();
        assert!(!decoded.all_day);
        assert_eq!(decoded.status, EventStatus::Confirmed);
        assert_eq!(decoded.location, None);
    }

    #[test]
    fn service_type_strings() {
        assert_eq!(ServiceType::DropIn.as_str(), "drop-in");
        assert_eq!(ServiceType::MeetGreet.as_str(), "meet-greet");
        let json = serde_json::to_string(&ServiceType::NailTrim).unwrap();
        assert_eq!(json, "\"nail-trim\"");
    }
}
