//! Trip (movement) model.
//!
//! A trip is one point-to-point movement with a departure and an arrival
//! time of day. Trips carry no date; a trip whose arrival is earlier than
//! its departure is treated as arriving on the following day.
//!
//! # Time Representation
//! Times are `NaiveTime`. Arithmetic goes through offsets from midnight
//! of the departure day ([`Trip::departure_offset`], [`Trip::arrival_offset`]),
//! so durations never come out negative for overnight trips.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// One scheduled movement between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Departure location.
    pub origin: String,
    /// Arrival location.
    pub destination: String,
    /// Departure time of day.
    pub departure: NaiveTime,
    /// Arrival time of day.
    pub arrival: NaiveTime,
    /// Minutes since the previous trip's arrival in overall departure order.
    /// Informational only; 0 for the first trip.
    pub turnaround_minutes: i64,
}

impl Trip {
    /// Creates a new trip.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveTime,
        arrival: NaiveTime,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure,
            arrival,
            turnaround_minutes: 0,
        }
    }

    /// Whether the arrival falls on the day after the departure.
    #[inline]
    pub fn is_overnight(&self) -> bool {
        self.arrival < self.departure
    }

    /// Departure as an offset from midnight.
    #[inline]
    pub fn departure_offset(&self) -> TimeDelta {
        offset_of(self.departure)
    }

    /// Arrival as an offset from midnight of the departure day.
    pub fn arrival_offset(&self) -> TimeDelta {
        let offset = offset_of(self.arrival);
        if self.is_overnight() {
            offset + TimeDelta::days(1)
        } else {
            offset
        }
    }

    /// Time spent moving.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.arrival_offset() - self.departure_offset()
    }
}

/// Offset of a time of day from midnight.
#[inline]
fn offset_of(time: NaiveTime) -> TimeDelta {
    TimeDelta::seconds(i64::from(time.num_seconds_from_midnight()))
}

#[cfg(test)]
pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
