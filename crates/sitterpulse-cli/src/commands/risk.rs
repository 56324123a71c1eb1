use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use sitterpulse_core::{burnout, rules};

#[derive(Args)]
pub struct RiskArgs {
    /// JSON file with an array of calendar events
    #[arg(long)]
    pub events: PathBuf,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RiskArgs) -> Result<(), Box<dyn Error>> {
    let classified = super::util::load_events(&args.events)?;
    let settings = super::util::settings();
    let now = Utc::now();
    let (from, to) = super::util::covered_range(&classified);

    let violations = rules::evaluate(&classified, from, to, &settings, now);
    let risk = burnout::assess(violations, &classified, &settings, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&risk)?);
        return Ok(());
    }

    println!("Burnout risk: {} (score {}/100)", risk.level, risk.score);
    for factor in &risk.factors {
        println!("  - {factor}");
    }
    if !risk.violations.is_empty() {
        println!("{} violations considered", risk.violations.len());
    }
    Ok(())
}
