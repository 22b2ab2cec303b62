//! Duty rules and run configuration.
//!
//! [`DutyRules`] carries the three limits the scheduler enforces. Values are
//! whole minutes so the struct round-trips through JSON unchanged.
//!
//! | Rule | Default |
//! |------|---------|
//! | Minimum turnaround | 2 min |
//! | Maximum continuous duty | 4 h 30 min |
//! | Idle gap that restarts duty | 10 min |

use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Default minimum idle time between two chained trips (minutes).
pub const MIN_TURNAROUND_MINUTES: i64 = 2;
/// Default maximum continuous duty (minutes).
pub const MAX_DUTY_MINUTES: i64 = 4 * 60 + 30;
/// Default idle gap at which a duty window restarts (minutes).
pub const GAP_RESET_MINUTES: i64 = 10;
/// Largest value any rule may take (minutes). Trip offsets span at most
/// two days, so nothing beyond that changes an outcome.
pub const RULE_LIMIT_MINUTES: i64 = 48 * 60;

/// Limits applied when chaining trips into one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DutyRules {
    /// Minimum idle time between arrival and the next departure.
    pub min_turnaround_minutes: i64,
    /// Longest duty window a schedule may accumulate before taking a trip.
    pub max_duty_minutes: i64,
    /// Idle time at which the duty window restarts.
    pub gap_reset_minutes: i64,
}

impl Default for DutyRules {
    fn default() -> Self {
        Self {
            min_turnaround_minutes: MIN_TURNAROUND_MINUTES,
            max_duty_minutes: MAX_DUTY_MINUTES,
            gap_reset_minutes: GAP_RESET_MINUTES,
        }
    }
}

impl DutyRules {
    /// Creates the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum turnaround.
    pub fn with_min_turnaround(mut self, minutes: i64) -> Self {
        self.min_turnaround_minutes = minutes;
        self
    }

    /// Sets the duty cap.
    pub fn with_max_duty(mut self, minutes: i64) -> Self {
        self.max_duty_minutes = minutes;
        self
    }

    /// Sets the gap-reset threshold.
    pub fn with_gap_reset(mut self, minutes: i64) -> Self {
        self.gap_reset_minutes = minutes;
        self
    }

    /// Minimum turnaround, clamped to [`RULE_LIMIT_MINUTES`].
    #[inline]
    pub fn min_turnaround(&self) -> TimeDelta {
        rule_delta(self.min_turnaround_minutes)
    }

    /// Duty cap, clamped to [`RULE_LIMIT_MINUTES`].
    #[inline]
    pub fn max_duty(&self) -> TimeDelta {
        rule_delta(self.max_duty_minutes)
    }

    /// Gap-reset threshold, clamped to [`RULE_LIMIT_MINUTES`].
    #[inline]
    pub fn gap_reset(&self) -> TimeDelta {
        rule_delta(self.gap_reset_minutes)
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        check_range("min_turnaround_minutes", self.min_turnaround_minutes, 0)?;
        check_range("max_duty_minutes", self.max_duty_minutes, 1)?;
        check_range("gap_reset_minutes", self.gap_reset_minutes, 0)?;
        Ok(())
    }
}

fn rule_delta(minutes: i64) -> TimeDelta {
    TimeDelta::minutes(minutes.clamp(-RULE_LIMIT_MINUTES, RULE_LIMIT_MINUTES))
}

fn check_range(name: &str, value: i64, min: i64) -> Result<()> {
    if (min..=RULE_LIMIT_MINUTES).contains(&value) {
        Ok(())
    } else {
        Err(ScheduleError::InvalidConfig(format!(
            "{name} must be within {min}..={RULE_LIMIT_MINUTES}, got {value}"
        )))
    }
}

/// What the loader does with a trip whose arrival is earlier than its departure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPolicy {
    /// Keep the trip; its arrival counts as the following day.
    #[default]
    RollOver,
    /// Fail the load with a malformed-input error.
    Reject,
}

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: DutyRules,
    pub overnight: OvernightPolicy,
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_json::from_str(&text)
            .map_err(|e| ScheduleError::InvalidConfig(format!("{}: {e}", path.as_ref().display())))?;
        config.rules.validate()?;
        Ok(config)
    }
}
