use std::error::Error;

use clap::Subcommand;
use sitterpulse_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a value by dot-separated key
    Get { key: String },
    /// Set a value by dot-separated key
    Set { key: String, value: String },
    /// List all keys and values
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Get { key } => {
            let cfg = Config::load_or_default();
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = Config::load_or_default();
            cfg.set(&key, &value)?;
            cfg.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            for (key, value) in Config::load_or_default().list() {
                println!("{key} = {value}");
            }
        }
    }
    Ok(())
}
