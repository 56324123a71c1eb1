use std::error::Error;
use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct ClassifyArgs {
    /// JSON file with an array of calendar events
    #[arg(long)]
    pub events: PathBuf,
    /// Print full JSON instead of one summary line per entry
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ClassifyArgs) -> Result<(), Box<dyn Error>> {
    let classified = super::util::load_events(&args.events)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
        return Ok(());
    }

    for entry in &classified {
        let kind = if entry.is_work { "work" } else { "personal" };
        let service = entry
            .service
            .as_ref()
            .map_or("-", |s| s.service_type.as_str());
        let client = entry.client_name.as_deref().unwrap_or("-");
        println!("{kind:<9} {service:<11} {client:<16} {}", entry.event.title);
    }
    Ok(())
}
