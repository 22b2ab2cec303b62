//! Roster audit.
//!
//! Re-checks a finished roster against the input trips and the duty rules.
//! Detects:
//! - Trips dropped or placed more than once
//! - Chains that break location continuity
//! - Connections shorter than the minimum turnaround
//! - Duty windows that had passed the cap when a trip was taken on
//!
//! All violations are collected; the audit does not stop at the first one.

use std::collections::HashMap;

use chrono::TimeDelta;

use crate::config::DutyRules;
use crate::models::{Schedule, Trip};

/// Audit result.
pub type AuditResult = Result<(), Vec<RosterViolation>>;

/// A broken roster property.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterViolation {
    /// Violation category.
    pub kind: ViolationKind,
    /// 1-based schedule number, when the violation belongs to one schedule.
    pub schedule: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// An input trip does not appear in any schedule.
    MissingTrip,
    /// A trip appears more often than in the input.
    DuplicateTrip,
    /// Adjacent trips do not meet at the same location.
    Discontinuity,
    /// Adjacent trips are closer than the minimum turnaround.
    TurnaroundTooShort,
    /// A trip was taken on after the duty window passed the cap.
    DutyExceeded,
}

impl RosterViolation {
    fn new(kind: ViolationKind, schedule: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            schedule,
            message: message.into(),
        }
    }
}

/// Audits `schedules` against `input` under `rules`.
///
/// # Returns
/// `Ok(())` if every property holds, `Err(violations)` otherwise.
pub fn validate_roster(input: &[Trip], schedules: &[Schedule], rules: &DutyRules) -> AuditResult {
    let mut violations = check_coverage(input, schedules);

    for (idx, schedule) in schedules.iter().enumerate() {
        check_chain(idx + 1, schedule, rules, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

type TripKey<'a> = (&'a str, &'a str, chrono::NaiveTime, chrono::NaiveTime);

fn key(trip: &Trip) -> TripKey<'_> {
    (
        trip.origin.as_str(),
        trip.destination.as_str(),
        trip.departure,
        trip.arrival,
    )
}

/// Compares input and placed trips as multisets.
fn check_coverage(input: &[Trip], schedules: &[Schedule]) -> Vec<RosterViolation> {
    let mut balance: HashMap<TripKey<'_>, i64> = HashMap::new();
    for trip in input {
        *balance.entry(key(trip)).or_insert(0) += 1;
    }
    for trip in schedules.iter().flat_map(|s| s.trips()) {
        *balance.entry(key(trip)).or_insert(0) -= 1;
    }

    let mut violations = Vec::new();
    let mut unbalanced: Vec<_> = balance.into_iter().filter(|(_, n)| *n != 0).collect();
    unbalanced.sort_by_key(|((_, _, dep, _), _)| *dep);

    for ((origin, destination, dep, _), n) in unbalanced {
        let (kind, what) = if n > 0 {
            (ViolationKind::MissingTrip, "missing from roster")
        } else {
            (ViolationKind::DuplicateTrip, "placed more than once")
        };
        violations.push(RosterViolation::new(
            kind,
            None,
            format!(
                "Trip {origin} {} → {destination} {what} ({} time(s))",
                dep.format("%H:%M"),
                n.abs()
            ),
        ));
    }
    violations
}

/// Replays one chain and checks each connection.
fn check_chain(
    number: usize,
    schedule: &Schedule,
    rules: &DutyRules,
    violations: &mut Vec<RosterViolation>,
) {
    let trips = schedule.trips();
    let mut window_start = trips[0].departure_offset();

    for pair in trips.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        let last_arrival = earlier.arrival_offset();
        let departure = later.departure_offset();
        let gap = departure - last_arrival;

        if earlier.destination != later.origin {
            violations.push(RosterViolation::new(
                ViolationKind::Discontinuity,
                Some(number),
                format!(
                    "Trip ending at '{}' followed by trip starting at '{}'",
                    earlier.destination, later.origin
                ),
            ));
        }

        if gap < rules.min_turnaround() {
            violations.push(RosterViolation::new(
                ViolationKind::TurnaroundTooShort,
                Some(number),
                format!(
                    "Only {} min between {} arrival and {} departure",
                    gap.num_minutes(),
                    earlier.arrival.format("%H:%M"),
                    later.departure.format("%H:%M")
                ),
            ));
        }

        if gap >= rules.gap_reset() {
            window_start = departure;
        } else {
            let duty: TimeDelta = last_arrival - window_start;
            if duty > rules.max_duty() {
                violations.push(RosterViolation::new(
                    ViolationKind::DutyExceeded,
                    Some(number),
                    format!(
                        "Duty at {} was {} min, over the {} min cap",
                        later.departure.format("%H:%M"),
                        duty.num_minutes(),
                        rules.max_duty_minutes
                    ),
                ));
            }
        }
    }
}
