//! CLI argument parsing for the turn-schedule binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use turn_schedule::config::{AppConfig, OvernightPolicy};
use turn_schedule::error::Result;

#[derive(Parser)]
#[command(
    name = "turn-schedule",
    version,
    about = "Chain timetabled trips into duty schedules"
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load trips and print them with their turnaround column
    Trips {
        /// Trip CSV (origin,destination,departure_time,arrival_time)
        file: PathBuf,
    },
    /// Build duty schedules from a trip CSV
    Plan {
        /// Trip CSV (origin,destination,departure_time,arrival_time)
        file: PathBuf,
        /// Write the schedules to a .csv or .json file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print roster metrics after the schedules
        #[arg(long)]
        summary: bool,
    },
    /// Write a synthetic trip CSV
    Generate {
        /// Destination CSV file
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 50)]
        trips: usize,
        #[arg(long, default_value_t = 4)]
        locations: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

/// Rule overrides shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct Settings {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum turnaround between chained trips (minutes)
    #[arg(long, global = true, env = "TURN_MIN_TURNAROUND")]
    pub min_turnaround: Option<i64>,

    /// Maximum continuous duty (minutes)
    #[arg(long, global = true, env = "TURN_MAX_DUTY")]
    pub max_duty: Option<i64>,

    /// Idle gap that restarts the duty window (minutes)
    #[arg(long, global = true, env = "TURN_GAP_RESET")]
    pub gap_reset: Option<i64>,

    /// Fail on trips whose arrival is earlier than their departure
    #[arg(long, global = true)]
    pub reject_overnight: bool,
}

impl Settings {
    /// Resolves the run configuration: file first, then flag overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(minutes) = self.min_turnaround {
            config.rules = config.rules.with_min_turnaround(minutes);
        }
        if let Some(minutes) = self.max_duty {
            config.rules = config.rules.with_max_duty(minutes);
        }
        if let Some(minutes) = self.gap_reset {
            config.rules = config.rules.with_gap_reset(minutes);
        }
        if self.reject_overnight {
            config.overnight = OvernightPolicy::Reject;
        }

        config.rules.validate()?;
        Ok(config)
    }
}
