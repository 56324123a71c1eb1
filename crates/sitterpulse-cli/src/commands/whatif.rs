use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use sitterpulse_core::{classify, rules, CalendarEvent, EventStatus, ValidationError};

#[derive(Args)]
pub struct WhatifArgs {
    /// JSON file with the existing calendar events
    #[arg(long)]
    pub events: PathBuf,
    /// Title for the prospective booking
    #[arg(long)]
    pub title: String,
    /// Start of the booking (RFC 3339)
    #[arg(long)]
    pub start: DateTime<Utc>,
    /// End of the booking (RFC 3339)
    #[arg(long)]
    pub end: DateTime<Utc>,
    /// Location of the booking
    #[arg(long)]
    pub location: Option<String>,
}

pub fn run(args: WhatifArgs) -> Result<(), Box<dyn Error>> {
    if args.end <= args.start {
        return Err(ValidationError::InvalidTimeRange {
            start: args.start,
            end: args.end,
        }
        .into());
    }

    let existing = super::util::load_events(&args.events)?;
    let settings = super::util::settings();

    let candidate = classify(CalendarEvent {
        id: uuid::Uuid::new_v4().to_string(),
        calendar_id: "whatif".to_string(),
        title: args.title,
        start: args.start,
        end: args.end,
        all_day: false,
        status: EventStatus::Confirmed,
        location: args.location,
    });

    let violations = rules::would_violate_rules(&existing, &candidate, &settings);
    if violations.is_empty() {
        println!("Booking fits within the configured rules");
        return Ok(());
    }
    for v in &violations {
        println!("{:<8} {}", v.severity.as_str(), v.message);
    }
    Ok(())
}
