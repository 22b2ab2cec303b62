//! Display and export shapes for trips and schedules.
//!
//! A schedule renders as its trip chain, one `origin HH:MM → destination`
//! entry per trip joined by `"; "`:
//!
//! ```text
//! A 08:00 → B; B 09:05 → A
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Trip};

/// Separator between trips in a rendered chain.
pub const CHAIN_SEPARATOR: &str = "; ";

const TIME_FORMAT: &str = "%H:%M";

/// One trip as it appears in exported rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripLeg {
    /// Location the trip leaves from.
    pub origin: String,
    /// `HH:MM`.
    pub departure_time: String,
    /// Location the trip arrives at.
    pub destination: String,
}

/// One schedule as it appears in exported rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// 1-based position in creation order.
    pub schedule_index: usize,
    /// Trips in the order they were chained.
    pub trips: Vec<TripLeg>,
}

impl From<&Trip> for TripLeg {
    fn from(trip: &Trip) -> Self {
        Self {
            origin: trip.origin.clone(),
            departure_time: trip.departure.format(TIME_FORMAT).to_string(),
            destination: trip.destination.clone(),
        }
    }
}

impl TripLeg {
    fn render(&self) -> String {
        format!("{} {} → {}", self.origin, self.departure_time, self.destination)
    }
}

/// Renders a schedule as its trip chain.
pub fn format_schedule(schedule: &Schedule) -> String {
    schedule
        .trips()
        .iter()
        .map(|t| TripLeg::from(t).render())
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// Converts schedules to export records, numbered from 1.
pub fn to_records(schedules: &[Schedule]) -> Vec<ScheduleRecord> {
    schedules
        .iter()
        .enumerate()
        .map(|(idx, schedule)| ScheduleRecord {
            schedule_index: idx + 1,
            trips: schedule.trips().iter().map(TripLeg::from).collect(),
        })
        .collect()
}

const TRIP_COLUMNS: [&str; 5] = [
    "origin",
    "destination",
    "departure_time",
    "arrival_time",
    "turnaround_time",
];

/// Renders trips as an aligned text table with their turnaround column.
pub fn render_trip_table(trips: &[Trip]) -> String {
    let rows: Vec<[String; 5]> = trips
        .iter()
        .map(|t| {
            [
                t.origin.clone(),
                t.destination.clone(),
                t.departure.format(TIME_FORMAT).to_string(),
                t.arrival.format(TIME_FORMAT).to_string(),
                t.turnaround_minutes.to_string(),
            ]
        })
        .collect();

    let mut widths = TRIP_COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, TRIP_COLUMNS.iter().copied(), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
