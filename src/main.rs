//! turn-schedule - chain timetabled trips into duty schedules.

mod cli;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use turn_schedule::config::AppConfig;
use turn_schedule::error::ScheduleError;
use turn_schedule::format::{format_schedule, render_trip_table};
use turn_schedule::generator::{generate_trips, GeneratorConfig};
use turn_schedule::io::{export_schedules, load_trips, write_trips_csv};
use turn_schedule::logging;
use turn_schedule::models::Trip;
use turn_schedule::scheduler::{prepare_trips, DutyScheduler, RosterSummary};
use turn_schedule::validation::validate_roster;

use cli::{Cli, Command};

fn main() -> Result<()> {
    logging::init();
    run(Cli::parse(), &mut std::io::stdout().lock())
}

/// Runs one subcommand, writing its report to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = cli
        .settings
        .resolve()
        .context("failed to resolve configuration")?;
    info!(rules = ?config.rules, overnight = ?config.overnight, "configuration loaded");

    match cli.command {
        Command::Trips { file } => {
            let Some(trips) = load(&file, &config)? else {
                return Ok(());
            };
            write!(out, "{}", render_trip_table(&prepare_trips(trips)))?;
        }
        Command::Plan {
            file,
            output,
            summary,
        } => {
            let trips = match load(&file, &config)? {
                Some(trips) => prepare_trips(trips),
                None => Vec::new(),
            };

            let schedules = DutyScheduler::new()
                .with_rules(config.rules)
                .compute_schedules(&trips);

            if let Err(violations) = validate_roster(&trips, &schedules, &config.rules) {
                for v in &violations {
                    error!(kind = ?v.kind, schedule = ?v.schedule, "{}", v.message);
                }
            }

            for (idx, schedule) in schedules.iter().enumerate() {
                writeln!(out, "Schedule {}: {}", idx + 1, format_schedule(schedule))?;
            }
            if summary {
                writeln!(out)?;
                writeln!(out, "{}", RosterSummary::calculate(&schedules))?;
            }
            if let Some(path) = output {
                export_schedules(&path, &schedules)
                    .with_context(|| format!("failed to export to {}", path.display()))?;
            }
        }
        Command::Generate {
            output,
            trips,
            locations,
            seed,
        } => {
            let generator = GeneratorConfig::default()
                .with_trips(trips)
                .with_locations(locations)
                .with_seed(seed);
            let trips = generate_trips(&generator)?;
            let file = File::create(&output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            write_trips_csv(BufWriter::new(file), &trips)?;
            info!(path = %output.display(), trips = trips.len(), "trip file written");
        }
    }

    Ok(())
}

/// Loads trips; empty input is reported and yields `None` rather than failing.
fn load(path: &std::path::Path, config: &AppConfig) -> Result<Option<Vec<Trip>>> {
    match load_trips(path, config.overnight) {
        Ok(trips) => Ok(Some(trips)),
        Err(ScheduleError::EmptyInput) => {
            warn!(path = %path.display(), "no trips in input, nothing to schedule");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}
