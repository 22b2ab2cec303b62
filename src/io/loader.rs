//! CSV trip loader.
//!
//! Expects a header row naming `origin`, `destination`, `departure_time`
//! and `arrival_time` (any order, extra columns ignored). Times are
//! `HH:MM`, with `HH:MM:SS` also accepted. Blank rows are skipped.
//!
//! `row` in errors counts CSV records after the header, starting at 1. The
//! csv reader drops fully empty lines, so they take no number; a row of
//! bare separators (`,,,`) is a record and does. A missing column is
//! reported against row 0.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::config::OvernightPolicy;
use crate::error::{Result, ScheduleError};
use crate::models::Trip;

pub const ORIGIN: &str = "origin";
pub const DESTINATION: &str = "destination";
pub const DEPARTURE_TIME: &str = "departure_time";
pub const ARRIVAL_TIME: &str = "arrival_time";

/// Column positions of the required fields.
struct Columns {
    origin: usize,
    destination: usize,
    departure: usize,
    arrival: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| ScheduleError::malformed(0, name, "column missing from header"))
        };
        Ok(Self {
            origin: find(ORIGIN)?,
            destination: find(DESTINATION)?,
            departure: find(DEPARTURE_TIME)?,
            arrival: find(ARRIVAL_TIME)?,
        })
    }
}

/// Loads trips from a CSV file.
pub fn load_trips(path: impl AsRef<Path>, overnight: OvernightPolicy) -> Result<Vec<Trip>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => {}
        other => {
            return Err(ScheduleError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            ))
        }
    }

    let file = File::open(path)?;
    let trips = read_trips(file, overnight)?;
    info!(path = %path.display(), trips = trips.len(), "trips loaded");
    Ok(trips)
}

/// Reads trips from CSV text.
///
/// # Errors
/// - [`ScheduleError::MalformedInput`] for a missing field or bad time.
/// - [`ScheduleError::EmptyInput`] if no trip rows remain.
pub fn read_trips(reader: impl Read, overnight: OvernightPolicy) -> Result<Vec<Trip>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::locate(reader.headers()?)?;

    let mut trips = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = idx + 1;
        let trip = parse_row(row, &record, &columns)?;

        if trip.is_overnight() {
            match overnight {
                OvernightPolicy::RollOver => warn!(
                    row,
                    departure = %trip.departure.format("%H:%M"),
                    arrival = %trip.arrival.format("%H:%M"),
                    "arrival before departure, treating as overnight trip"
                ),
                OvernightPolicy::Reject => {
                    return Err(ScheduleError::malformed(
                        row,
                        ARRIVAL_TIME,
                        "arrival is earlier than departure (overnight trips rejected)",
                    ))
                }
            }
        }
        trips.push(trip);
    }

    if trips.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }
    Ok(trips)
}

fn parse_row(row: usize, record: &StringRecord, columns: &Columns) -> Result<Trip> {
    let origin = required(row, record, columns.origin, ORIGIN)?;
    let destination = required(row, record, columns.destination, DESTINATION)?;
    let departure = required(row, record, columns.departure, DEPARTURE_TIME)?;
    let arrival = required(row, record, columns.arrival, ARRIVAL_TIME)?;
    Ok(Trip::new(
        origin,
        destination,
        parse_time(row, DEPARTURE_TIME, departure)?,
        parse_time(row, ARRIVAL_TIME, arrival)?,
    ))
}

fn required<'r>(row: usize, record: &'r StringRecord, idx: usize, field: &str) -> Result<&'r str> {
    match record.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ScheduleError::malformed(row, field, "value is missing")),
    }
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time(row: usize, field: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ScheduleError::malformed(row, field, format!("expected HH:MM, got '{value}'")))
}
