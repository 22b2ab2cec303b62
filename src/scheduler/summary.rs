//! Roster summary metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Schedules | Number of duties opened |
//! | Trips | Trips placed across all schedules |
//! | Avg trips | Trips / schedules |
//! | Longest duty | Max current duty window over all schedules |
//! | Gap resets | Duty windows restarted after an idle gap |
//! | Overnight trips | Trips arriving the day after they depart |

use std::fmt;

use chrono::TimeDelta;

use crate::models::Schedule;

/// Headline figures for a set of schedules.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub schedule_count: usize,
    pub trip_count: usize,
    /// 0.0 when there are no schedules.
    pub avg_trips_per_schedule: f64,
    pub longest_duty: TimeDelta,
    pub gap_resets: usize,
    pub overnight_trips: usize,
}

impl RosterSummary {
    /// Computes the summary of `schedules`.
    pub fn calculate(schedules: &[Schedule]) -> Self {
        let trip_count: usize = schedules.iter().map(Schedule::trip_count).sum();
        let longest_duty = schedules
            .iter()
            .map(Schedule::duty_time)
            .max()
            .unwrap_or_else(TimeDelta::zero);
        let gap_resets = schedules.iter().map(Schedule::gap_resets).sum();
        let overnight_trips = schedules
            .iter()
            .flat_map(|s| s.trips())
            .filter(|t| t.is_overnight())
            .count();

        let avg_trips_per_schedule = if schedules.is_empty() {
            0.0
        } else {
            trip_count as f64 / schedules.len() as f64
        };

        Self {
            schedule_count: schedules.len(),
            trip_count,
            avg_trips_per_schedule,
            longest_duty,
            gap_resets,
            overnight_trips,
        }
    }
}

impl fmt::Display for RosterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.longest_duty.num_minutes();
        writeln!(f, "schedules:        {}", self.schedule_count)?;
        writeln!(f, "trips:            {}", self.trip_count)?;
        writeln!(f, "trips/schedule:   {:.2}", self.avg_trips_per_schedule)?;
        writeln!(f, "longest duty:     {}:{:02}", minutes / 60, minutes % 60)?;
        writeln!(f, "gap resets:       {}", self.gap_resets)?;
        write!(f, "overnight trips:  {}", self.overnight_trips)
    }
}
