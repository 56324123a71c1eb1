use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sitterpulse-cli", version, about = "SitterPulse CLI")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a calendar export into work and personal entries
    Classify(commands::classify::ClassifyArgs),
    /// Workload reports
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Rule violations for a date range
    Check(commands::check::CheckArgs),
    /// Burnout risk assessment
    Risk(commands::risk::RiskArgs),
    /// Ask whether a prospective booking would violate the daily rules
    Whatif(commands::whatif::WhatifArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Report { action } => commands::report::run(action),
        Commands::Check(args) => commands::check::run(args),
        Commands::Risk(args) => commands::risk::run(args),
        Commands::Whatif(args) => commands::whatif::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
