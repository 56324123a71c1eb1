use std::error::Error;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use sitterpulse_core::workload;

#[derive(Subcommand)]
pub enum ReportAction {
    /// Metrics for one day
    Day {
        /// JSON file with an array of calendar events
        #[arg(long)]
        events: PathBuf,
        /// Day to report on (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Summary of the week containing a date
    Week {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Summary of the month containing a date
    Month {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn Error>> {
    let settings = super::util::settings();
    let today = || Utc::now().date_naive();

    match action {
        ReportAction::Day { events, date } => {
            let classified = super::util::load_events(&events)?;
            let metrics =
                workload::metrics_for_day(date.unwrap_or_else(today), &classified, &settings);
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        ReportAction::Week { events, date } => {
            let classified = super::util::load_events(&events)?;
            let summary =
                workload::week_summary(date.unwrap_or_else(today), &classified, &settings);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        ReportAction::Month { events, date } => {
            let classified = super::util::load_events(&events)?;
            let summary =
                workload::month_summary(date.unwrap_or_else(today), &classified, &settings);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
