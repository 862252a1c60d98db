//! access-journeys - accessibility comparison for the Penn Station → Jay St-MetroTech route
//!
//! Module structure:
//! - `domain/` - Profiles, journeys, outage records and the fixture dataset
//! - `services/` - Profile selection and derived metrics
//! - `io/` - Report output
//! - `view/` - Terminal dashboard (see the `access-journeys-tui` binary)
//! - `infra/` - Configuration and logging

use access_journeys::domain::{dataset, Profile};
use access_journeys::infra::{init_logging, Config, LogSink, ReportFormat};
use access_journeys::io::{write_report, Report};
use access_journeys::services::effort_color;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Same destination, different journeys: accessibility comparison report
#[derive(Parser, Debug)]
#[command(name = "access-journeys", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the per-profile comparison report
    Report {
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Profile the time impact is measured against
        #[arg(short, long)]
        reference: Option<Profile>,

        /// Only report this profile
        #[arg(short, long)]
        profile: Option<Profile>,
    },
    /// Check the compiled-in dataset against its invariants
    Validate,
    /// Print the effort level legend with palette colors
    Legend,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref());

    if let Err(e) = init_logging(&config, LogSink::Stderr) {
        eprintln!("Warning: {:#}", e);
    }

    info!(
        config_file = %config.config_file(),
        default_profile = %config.default_profile(),
        reference_profile = %config.reference_profile(),
        "config_loaded"
    );

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "command_failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let data = dataset();
    data.validate().context("Dataset failed validation")?;

    match command {
        Command::Report { format, output, reference, profile } => {
            let reference = reference.unwrap_or(config.reference_profile());
            let report = Report::build(data, reference, profile)?;
            write_report(&report, format.unwrap_or(config.report_format()), output.as_deref())?;
        }
        Command::Validate => {
            info!(journeys = data.journeys().len(), outages = data.outages().len(), "dataset_valid");
            println!("dataset ok: {} journeys, {} outage records", data.journeys().len(), data.outages().len());
        }
        Command::Legend => {
            for entry in data.effort_legend() {
                println!(
                    "{} {} {} ({})",
                    entry.level,
                    effort_color(i64::from(entry.level)),
                    entry.description,
                    entry.examples
                );
            }
        }
    }
    Ok(())
}
