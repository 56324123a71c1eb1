use std::error::Error;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;
use sitterpulse_core::rules;

#[derive(Args)]
pub struct CheckArgs {
    /// JSON file with an array of calendar events
    #[arg(long)]
    pub events: PathBuf,
    /// First day of the range (defaults to the earliest event)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day of the range (defaults to the latest event)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Print full JSON instead of one line per violation
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn Error>> {
    let classified = super::util::load_events(&args.events)?;
    let settings = super::util::settings();
    let (default_from, default_to) = super::util::covered_range(&classified);
    let from = args.from.unwrap_or(default_from);
    let to = args.to.unwrap_or(default_to);

    let violations = rules::evaluate(&classified, from, to, &settings, Utc::now());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&violations)?);
        return Ok(());
    }

    if violations.is_empty() {
        println!("No rule violations found");
        return Ok(());
    }
    for v in &violations {
        println!("{:<8} {:<21} {}", v.severity.as_str(), v.kind.as_str(), v.message);
    }
    Ok(())
}
