//! Schedule (duty roster) model.
//!
//! A schedule is a non-empty chain of trips worked by one vehicle or crew.
//! Adjacent trips connect by location, leave at least the minimum
//! turnaround between them, and the current duty window never exceeds the
//! duty cap when a trip is taken on.
//!
//! # Duty Window
//! The window opens at the departure of the schedule's first trip. When a
//! trip is accepted after an idle gap of at least the reset threshold, the
//! window reopens at that trip's departure and accumulated duty is
//! forgotten.

use chrono::TimeDelta;

use super::Trip;
use crate::config::DutyRules;

/// An ordered chain of trips assigned to one duty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Trips in assignment order. Never empty.
    trips: Vec<Trip>,
    /// Offset (from midnight) of the departure that opened the current duty window.
    window_start: TimeDelta,
    /// Number of accepted trips that restarted the duty window.
    gap_resets: usize,
}

/// Outcome of a successful admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// Window start to persist once the trip is appended.
    pub window_start: TimeDelta,
    /// Whether the idle gap restarted the duty window.
    pub reset: bool,
}

/// Why a schedule turned a trip down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The trip does not start where the schedule's last trip ends.
    Discontinuous,
    /// The trip leaves before the minimum turnaround has passed.
    TurnaroundTooShort { gap: TimeDelta },
    /// The duty window is already past the cap.
    DutyExceeded { duty: TimeDelta },
}

impl Schedule {
    /// Opens a schedule with its first trip.
    pub fn new(first: Trip) -> Self {
        let window_start = first.departure_offset();
        Self {
            trips: vec![first],
            window_start,
            gap_resets: 0,
        }
    }

    /// Trips in chain order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// First trip of the chain.
    pub fn first_trip(&self) -> &Trip {
        &self.trips[0]
    }

    /// Last trip of the chain.
    pub fn last_trip(&self) -> &Trip {
        &self.trips[self.trips.len() - 1]
    }

    /// Number of trips.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Start of the current duty window (offset from midnight).
    pub fn window_start(&self) -> TimeDelta {
        self.window_start
    }

    /// How many times the duty window restarted.
    pub fn gap_resets(&self) -> usize {
        self.gap_resets
    }

    /// Elapsed time from the window start to the last arrival.
    pub fn duty_time(&self) -> TimeDelta {
        self.last_trip().arrival_offset() - self.window_start
    }

    /// Checks whether `trip` may be appended under `rules`.
    ///
    /// The gap reset is evaluated first, so a long enough idle period
    /// forgives duty accumulated before it. Nothing is mutated; pass the
    /// returned [`Admission`] to [`Schedule::push`].
    pub fn admit(&self, trip: &Trip, rules: &DutyRules) -> Result<Admission, Rejection> {
        let last = self.last_trip();
        let last_arrival = last.arrival_offset();
        let departure = trip.departure_offset();

        let gap = departure - last_arrival;
        let mut window_start = self.window_start;
        let mut duty = last_arrival - window_start;
        let reset = gap >= rules.gap_reset();
        if reset {
            window_start = departure;
            duty = TimeDelta::zero();
        }

        if last.destination != trip.origin {
            return Err(Rejection::Discontinuous);
        }
        if gap < rules.min_turnaround() {
            return Err(Rejection::TurnaroundTooShort { gap });
        }
        if duty > rules.max_duty() {
            return Err(Rejection::DutyExceeded { duty });
        }

        Ok(Admission {
            window_start,
            reset,
        })
    }

    /// Appends an admitted trip and persists its window start.
    pub fn push(&mut self, trip: Trip, admission: Admission) {
        self.window_start = admission.window_start;
        if admission.reset {
            self.gap_resets += 1;
        }
        self.trips.push(trip);
    }
}
