//! Work-vs-personal classification of calendar entries.
//!
//! Classification is a fixed, ordered pattern walk over the title text:
//! personal patterns first (any match wins and classification stops), then
//! work patterns in priority order with first-match-wins. Personal patterns
//! taking strict precedence is deliberate: an entry mentioning both work and
//! personal markers is treated as personal time, trading a few missed visits
//! for never counting a day off as work.
//!
//! Titles are compared as token sequences, not raw substrings, so a marker
//! like `off` matches `✨ off ✨` without firing inside `drop-off`.

use crate::event::{CalendarEvent, ClassifiedEvent, EventStatus, ServiceInfo, ServiceType};

/// Duration charged for a housesit, minutes.
pub const HOUSESIT_MINUTES: i64 = 1440;

/// Duration charged for an overnight stay, minutes.
pub const OVERNIGHT_MINUTES: i64 = 720;

/// Scheduled length at or above which a multi-day entry counts as overnight.
const OVERNIGHT_FLOOR_MINUTES: i64 = 8 * 60;

/// Minute suffixes the classifier recognizes at the end of a title.
pub const DURATION_SUFFIXES: &[i64] = &[15, 20, 30, 45, 60];

/// Separators that split a leading client name from the rest of a title.
pub const CLIENT_SEPARATORS: &[&str] = &[" - ", " – ", " — ", " | ", " @ "];

/// One group of personal-event markers.
pub struct PersonalPattern {
    pub category: &'static str,
    pub markers: &'static [&'static str],
}

/// Personal-event patterns, evaluated before any work pattern.
///
/// Order is part of the contract; the first matching group names the
/// category. Every marker is matched as a contiguous token sequence.
pub const PERSONAL_PATTERNS: &[PersonalPattern] = &[
    PersonalPattern {
        category: "admin",
        markers: &[
            "admin",
            "bookkeeping",
            "invoice",
            "invoices",
            "invoicing",
            "taxes",
            "paperwork",
        ],
    },
    PersonalPattern {
        category: "day-off",
        markers: &["off", "day off", "no work", "vacation", "pto", "staycation"],
    },
    PersonalPattern {
        category: "appointment",
        markers: &[
            "doctor",
            "dentist",
            "dr",
            "therapy",
            "therapist",
            "appointment",
            "appt",
            "checkup",
        ],
    },
    PersonalPattern {
        category: "blocked",
        markers: &["blocked", "busy", "hold", "unavailable", "do not book"],
    },
    PersonalPattern {
        category: "holiday",
        markers: &["holiday", "christmas", "thanksgiving", "new year", "new years", "easter"],
    },
    PersonalPattern {
        category: "meal",
        markers: &["breakfast", "lunch", "dinner", "brunch", "date night"],
    },
    PersonalPattern {
        category: "travel",
        markers: &["flight", "airport", "road trip", "travel day", "out of town"],
    },
    PersonalPattern {
        category: "entertainment",
        markers: &["movie", "movies", "concert", "party", "birthday", "game night"],
    },
    PersonalPattern {
        category: "self-care",
        markers: &["gym", "yoga", "haircut", "salon", "massage", "spa", "self care", "me time"],
    },
];

/// Work patterns in priority order. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkPattern {
    DurationSuffix,
    MeetGreet,
    Housesit,
    Overnight,
    NailTrim,
    Walk,
    DropIn,
    NamePrefix,
}

/// The work-pattern priority order. Tested, not incidental.
pub const WORK_PATTERNS: &[WorkPattern] = &[
    WorkPattern::DurationSuffix,
    WorkPattern::MeetGreet,
    WorkPattern::Housesit,
    WorkPattern::Overnight,
    WorkPattern::NailTrim,
    WorkPattern::Walk,
    WorkPattern::DropIn,
    WorkPattern::NamePrefix,
];

const MEET_GREET_MARKERS: &[&str] = &["meet and greet", "meet greet", "m&g", "meet n greet"];
const HOUSESIT_MARKERS: &[&str] = &[
    "housesit",
    "housesitting",
    "house sit",
    "house sitting",
    "house-sit",
];
const OVERNIGHT_MARKERS: &[&str] = &["overnight", "over night", "sleepover", "o/n"];
const NAIL_TRIM_MARKERS: &[&str] = &["nail trim", "nail trims", "nail-trim", "nails", "nail clip"];
const WALK_MARKERS: &[&str] = &["walk", "walks", "walking", "dog walk", "walkies"];
const DROP_IN_MARKERS: &[&str] = &[
    "drop-in",
    "drop in",
    "dropin",
    "visit",
    "visits",
    "check-in",
    "check in",
    "checkin",
    "feeding",
    "feed",
    "potty break",
    "let out",
];

/// Lowercased tokens with decorative characters trimmed from the edges.
/// Internal punctuation survives, so `drop-in` stays a single token.
fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whether `marker` occurs as a contiguous token sequence in `title_tokens`.
fn matches_marker(title_tokens: &[String], marker: &str) -> bool {
    let marker_tokens = tokens(marker);
    if marker_tokens.is_empty() {
        return false;
    }
    title_tokens
        .windows(marker_tokens.len())
        .any(|window| window.iter().eq(marker_tokens.iter()))
}

fn any_marker(title_tokens: &[String], markers: &[&str]) -> bool {
    markers.iter().any(|m| matches_marker(title_tokens, m))
}

/// The personal-pattern category a title falls under, if any.
pub fn personal_category(title: &str) -> Option<&'static str> {
    let title_tokens = tokens(title);
    PERSONAL_PATTERNS
        .iter()
        .find(|p| any_marker(&title_tokens, p.markers))
        .map(|p| p.category)
}

/// Parse a trailing minute suffix, tolerating a trailing "min"/"mins".
fn duration_suffix(title_tokens: &[String]) -> Option<i64> {
    let mut rev = title_tokens.iter().rev();
    let mut last = rev.next()?;
    if matches!(last.as_str(), "min" | "mins" | "minutes") {
        last = rev.next()?;
    }
    let minutes: i64 = last.parse().ok()?;
    DURATION_SUFFIXES.contains(&minutes).then_some(minutes)
}

impl WorkPattern {
    fn matches(&self, raw_title: &str, title_tokens: &[String]) -> bool {
        match self {
            Self::DurationSuffix => duration_suffix(title_tokens).is_some(),
            Self::MeetGreet => any_marker(title_tokens, MEET_GREET_MARKERS),
            Self::Housesit => any_marker(title_tokens, HOUSESIT_MARKERS),
            Self::Overnight => any_marker(title_tokens, OVERNIGHT_MARKERS),
            Self::NailTrim => any_marker(title_tokens, NAIL_TRIM_MARKERS),
            Self::Walk => any_marker(title_tokens, WALK_MARKERS),
            Self::DropIn => any_marker(title_tokens, DROP_IN_MARKERS),
            Self::NamePrefix => client_name(raw_title).is_some(),
        }
    }

    const fn service_type(&self) -> ServiceType {
        match self {
            Self::DurationSuffix | Self::DropIn => ServiceType::DropIn,
            Self::MeetGreet => ServiceType::MeetGreet,
            Self::Housesit => ServiceType::Housesit,
            Self::Overnight => ServiceType::Overnight,
            Self::NailTrim => ServiceType::NailTrim,
            Self::Walk => ServiceType::Walk,
            Self::NamePrefix => ServiceType::Other,
        }
    }
}

/// First matching work pattern for a title, if any.
pub fn work_pattern(title: &str) -> Option<WorkPattern> {
    let title_tokens = tokens(title);
    WORK_PATTERNS
        .iter()
        .copied()
        .find(|p| p.matches(title, &title_tokens))
}

/// Client name from the leading segment before the first separator.
pub fn client_name(title: &str) -> Option<String> {
    let first_sep = CLIENT_SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()?;
    let name = title[..first_sep]
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string();
    (!name.is_empty()).then_some(name)
}

/// Whether the entry counts as an overnight stay for duration capping.
///
/// True on a housesit/overnight title marker, or when the scheduled length
/// is at least 8 hours and the entry crosses a day boundary.
pub fn is_overnight(event: &CalendarEvent) -> bool {
    let title_tokens = tokens(&event.title);
    any_marker(&title_tokens, HOUSESIT_MARKERS)
        || any_marker(&title_tokens, OVERNIGHT_MARKERS)
        || (event.scheduled_minutes() >= OVERNIGHT_FLOOR_MINUTES && event.spans_multiple_days())
}

/// Classify one raw entry.
///
/// Total over its input: empty titles classify as personal, cancelled
/// entries never count as work, and nothing here can fail.
pub fn classify(event: CalendarEvent) -> ClassifiedEvent {
    let overnight = is_overnight(&event);

    let personal = |event: CalendarEvent| ClassifiedEvent {
        event,
        is_work: false,
        is_overnight: overnight,
        client_name: None,
        service: None,
    };

    if event.status == EventStatus::Cancelled {
        return personal(event);
    }

    let title_tokens = tokens(&event.title);
    if title_tokens.is_empty() {
        return personal(event);
    }
    if PERSONAL_PATTERNS
        .iter()
        .any(|p| any_marker(&title_tokens, p.markers))
    {
        return personal(event);
    }

    let Some(pattern) = WORK_PATTERNS
        .iter()
        .copied()
        .find(|p| p.matches(&event.title, &title_tokens))
    else {
        return personal(event);
    };

    // Housesit/overnight markers fix the service duration even when a
    // minute suffix also parsed.
    let (service_type, duration_minutes) = if pattern == WorkPattern::DurationSuffix
        && any_marker(&title_tokens, HOUSESIT_MARKERS)
    {
        (ServiceType::Housesit, HOUSESIT_MINUTES)
    } else if pattern == WorkPattern::DurationSuffix && any_marker(&title_tokens, OVERNIGHT_MARKERS)
    {
        (ServiceType::Overnight, OVERNIGHT_MINUTES)
    } else {
        match pattern {
            WorkPattern::DurationSuffix => (
                ServiceType::DropIn,
                duration_suffix(&title_tokens).unwrap_or_else(|| event.scheduled_minutes()),
            ),
            WorkPattern::Housesit => (ServiceType::Housesit, HOUSESIT_MINUTES),
            WorkPattern::Overnight => (ServiceType::Overnight, OVERNIGHT_MINUTES),
            other => (other.service_type(), event.scheduled_minutes()),
        }
    };

    let client = client_name(&event.title);
    ClassifiedEvent {
        event,
        is_work: true,
        is_overnight: overnight,
        client_name: client.clone(),
        service: Some(ServiceInfo {
            service_type,
            duration_minutes,
            pet_name: client,
        }),
    }
}

/// Classify a freshly fetched batch.
pub fn classify_batch(events: Vec<CalendarEvent>) -> Vec<ClassifiedEvent> {
    events.into_iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn event(title: &str, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            id: "e1".to_string(),
            calendar_id: "cal".to_string(),
            title: title.to_string(),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            all_day: false,
            status: EventStatus::Confirmed,
            location: None,
        }
    }

    fn short_event(title: &str) -> CalendarEvent {
        event(title, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z")
    }

    #[test]
    fn duration_suffix_title_is_a_drop_in() {
        let classified = classify(short_event("Fluffy - 30"));
        assert!(classified.is_work);
        assert_eq!(classified.client_name.as_deref(), Some("Fluffy"));
        let service = classified.service.unwrap();
        assert_eq!(service.service_type, ServiceType::DropIn);
        assert_eq!(service.duration_minutes, 30);
        assert_eq!(service.pet_name.as_deref(), Some("Fluffy"));
    }

    #[test]
    fn decorated_off_marker_is_personal() {
        let classified = classify(short_event("✨ off ✨"));
        assert!(!classified.is_work);
        assert!(classified.service.is_none());
    }

    #[test]
    fn empty_and_whitespace_titles_are_personal() {
        assert!(!classify(short_event("")).is_work);
        assert!(!classify(short_event("   ")).is_work);
    }

    #[test]
    fn personal_patterns_beat_cooccurring_work_markers() {
        // Both a meal marker and a valid duration suffix; personal wins.
        assert!(!classify(short_event("Lunch with Fluffy - 30")).is_work);
        // Day-off marker next to a walk marker.
        assert!(!classify(short_event("No work today, skip walk")).is_work);
    }

    #[test]
    fn off_does_not_fire_inside_hyphenated_compounds() {
        // "drop-off" stays one token, so the day-off marker cannot match it.
        let classified = classify(short_event("Key drop-off - Biscuit"));
        assert!(classified.is_work);
        assert_eq!(classified.client_name.as_deref(), Some("Key drop-off"));
    }

    #[test]
    fn cancelled_entries_never_count_as_work() {
        let mut raw = short_event("Fluffy - 30");
        raw.status = EventStatus::Cancelled;
        assert!(!classify(raw).is_work);
    }

    #[test]
    fn work_pattern_priority_is_first_match_wins() {
        // A walk marker and a drop-in marker together: walk ranks higher.
        let classified = classify(short_event("Walk and feed Rex"));
        assert_eq!(classified.service.unwrap().service_type, ServiceType::Walk);

        // A suffix outranks every named marker.
        let classified = classify(short_event("Walk Rex - 45"));
        assert_eq!(
            classified.service.unwrap().service_type,
            ServiceType::DropIn
        );
    }

    #[test]
    fn pattern_order_constant_is_pinned() {
        assert_eq!(
            WORK_PATTERNS,
            &[
                WorkPattern::DurationSuffix,
                WorkPattern::MeetGreet,
                WorkPattern::Housesit,
                WorkPattern::Overnight,
                WorkPattern::NailTrim,
                WorkPattern::Walk,
                WorkPattern::DropIn,
                WorkPattern::NamePrefix,
            ]
        );
        let categories: Vec<_> = PERSONAL_PATTERNS.iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            [
                "admin",
                "day-off",
                "appointment",
                "blocked",
                "holiday",
                "meal",
                "travel",
                "entertainment",
                "self-care",
            ]
        );
    }

    #[test]
    fn housesit_gets_fixed_duration_even_with_suffix() {
        let classified = classify(event(
            "Housesit Rex - 30",
            "2026-03-02T18:00:00Z",
            "2026-03-03T08:00:00Z",
        ));
        let service = classified.service.unwrap();
        assert_eq!(service.service_type, ServiceType::Housesit);
        assert_eq!(service.duration_minutes, HOUSESIT_MINUTES);
    }

    #[test]
    fn overnight_marker_sets_type_and_duration() {
        let classified = classify(short_event("Overnight with Bella"));
        let service = classified.service.unwrap();
        assert_eq!(service.service_type, ServiceType::Overnight);
        assert_eq!(service.duration_minutes, OVERNIGHT_MINUTES);
        assert!(classified.is_overnight);
    }

    #[test]
    fn long_multi_day_event_is_overnight_without_markers() {
        // 38 hours, crossing two midnights, no title marker.
        let classified = classify(event(
            "Rex - 30",
            "2026-03-02T18:00:00Z",
            "2026-03-04T08:00:00Z",
        ));
        assert!(classified.is_overnight);

        // Long but same-day: not overnight.
        let classified = classify(event(
            "Rex - 30",
            "2026-03-02T08:00:00Z",
            "2026-03-02T20:00:00Z",
        ));
        assert!(!classified.is_overnight);
    }

    #[test]
    fn client_name_extraction_handles_each_separator() {
        for sep in CLIENT_SEPARATORS {
            let title = format!("Biscuit{sep}walk");
            assert_eq!(client_name(&title).as_deref(), Some("Biscuit"), "{sep:?}");
        }
        assert_eq!(client_name("no separator here"), None);
        // Earliest separator wins when several are present.
        assert_eq!(client_name("Rex @ Park - 30").as_deref(), Some("Rex"));
    }

    #[test]
    fn meet_greet_variants_match() {
        for title in ["Meet and greet - Bella", "Meet & Greet | Bella", "M&G Bella"] {
            let classified = classify(short_event(title));
            assert_eq!(
                classified.service.map(|s| s.service_type),
                Some(ServiceType::MeetGreet),
                "{title}"
            );
        }
    }

    #[test]
    fn unmatched_titles_fall_back_to_personal() {
        assert!(!classify(short_event("errands")).is_work);
    }

    #[test]
    fn name_prefix_alone_is_generic_work() {
        let classified = classify(short_event("Biscuit - morning routine"));
        assert!(classified.is_work);
        let service = classified.service.unwrap();
        assert_eq!(service.service_type, ServiceType::Other);
        assert_eq!(service.duration_minutes, 30);
        assert_eq!(classified.client_name.as_deref(), Some("Biscuit"));
    }

    proptest! {
        // Personal precedence holds for arbitrary surrounding text, even
        // text that would classify as work on its own.
        #[test]
        fn personal_marker_always_wins(
            prefix in "[A-Za-z]{0,10}",
            suffix in "[A-Za-z]{0,10}",
        ) {
            let title = format!("{prefix} day off {suffix} walk");
            prop_assert!(!classify(short_event(&title)).is_work);
        }

        #[test]
        fn classify_never_panics_on_arbitrary_titles(title in "\\PC{0,40}") {
            let _ = classify(short_event(&title));
        }
    }
}
