//! Greedy first-fit duty scheduler.
//!
//! # Algorithm
//!
//! 1. Visit trips in the order given (departure order, ties in input order).
//! 2. For each trip, scan existing schedules in creation order.
//! 3. The first schedule whose admission check passes takes the trip,
//!    persisting a restarted duty window if the idle gap reached the
//!    reset threshold.
//! 4. If no schedule takes it, the trip opens a new schedule.
//!
//! The result is feasible, not minimal. Scan order changes the result, so
//! schedules are kept in a `Vec` in the order they were opened.
//!
//! # Complexity
//! O(n * s) where n=trips, s=schedules opened so far.

use tracing::{debug, info, trace};

use crate::config::DutyRules;
use crate::models::{Schedule, Trip};

/// Greedy first-fit assignment of trips to duty schedules.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use turn_schedule::models::Trip;
/// use turn_schedule::scheduler::DutyScheduler;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let trips = vec![
///     Trip::new("A", "B", t(8, 0), t(9, 0)),
///     Trip::new("B", "A", t(9, 5), t(10, 0)),
/// ];
///
/// let schedules = DutyScheduler::new().compute_schedules(&trips);
/// assert_eq!(schedules.len(), 1);
/// assert_eq!(schedules[0].trip_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DutyScheduler {
    rules: DutyRules,
}

impl DutyScheduler {
    /// Creates a scheduler with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duty rules.
    pub fn with_rules(mut self, rules: DutyRules) -> Self {
        self.rules = rules;
        self
    }

    /// Rules in force.
    pub fn rules(&self) -> &DutyRules {
        &self.rules
    }

    /// Partitions `trips` into schedules.
    ///
    /// `trips` must already be in departure order (see
    /// [`prepare_trips`](super::prepare_trips)). Every trip lands in exactly
    /// one schedule; empty input gives no schedules.
    pub fn compute_schedules(&self, trips: &[Trip]) -> Vec<Schedule> {
        let mut schedules: Vec<Schedule> = Vec::new();

        for trip in trips {
            if !self.assign_first_fit(&mut schedules, trip) {
                debug!(
                    schedule = schedules.len() + 1,
                    origin = %trip.origin,
                    departure = %trip.departure.format("%H:%M"),
                    "opening schedule"
                );
                schedules.push(Schedule::new(trip.clone()));
            }
        }

        info!(
            trips = trips.len(),
            schedules = schedules.len(),
            "duty scheduling complete"
        );
        schedules
    }

    /// Appends `trip` to the first schedule that admits it.
    fn assign_first_fit(&self, schedules: &mut [Schedule], trip: &Trip) -> bool {
        for (idx, schedule) in schedules.iter_mut().enumerate() {
            match schedule.admit(trip, &self.rules) {
                Ok(admission) => {
                    if admission.reset {
                        trace!(schedule = idx + 1, "duty window restarted after idle gap");
                    }
                    schedule.push(trip.clone(), admission);
                    return true;
                }
                Err(reason) => {
                    trace!(schedule = idx + 1, ?reason, "trip rejected");
                }
            }
        }
        false
    }
}

/// Runs the duty scheduler with the default rules.
pub fn compute_schedules(trips: &[Trip]) -> Vec<Schedule> {
    DutyScheduler::new().compute_schedules(trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hm;
    use chrono::TimeDelta;

    fn chain(schedule: &Schedule) -> Vec<(String, String)> {
        schedule
            .trips()
            .iter()
            .map(|t| (t.origin.clone(), t.departure.format("%H:%M").to_string()))
            .collect()
    }

    #[test]
    fn test_continuous_pair_shares_schedule() {
        let trips = vec![
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "A", hm(9, 5), hm(10, 0)),
        ];
        let schedules = compute_schedules(&trips);
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].duty_time(), TimeDelta::hours(2));
    }

    #[test]
    fn test_short_turnaround_opens_schedule() {
        let trips = vec![
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "A", hm(9, 1), hm(10, 0)),
        ];
        assert_eq!(compute_schedules(&trips).len(), 2);
    }

    #[test]
    fn test_first_fit_not_best_fit() {
        // Both schedules end at B; the trip goes to the one opened first even
        // though the second has the tighter connection.
        let trips = vec![
            Trip::new("A", "B", hm(7, 0), hm(7, 30)),
            Trip::new("C", "B", hm(7, 10), hm(7, 55)),
            Trip::new("B", "A", hm(7, 58), hm(8, 30)),
        ];
        let schedules = compute_schedules(&trips);
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].trip_count(), 2);
        assert_eq!(schedules[1].trip_count(), 1);
        assert_eq!(schedules[0].last_trip().departure, hm(7, 58));
    }

    #[test]
    fn test_skips_incompatible_schedule() {
        let trips = vec![
            Trip::new("A", "B", hm(7, 0), hm(7, 30)),
            Trip::new("C", "D", hm(7, 10), hm(7, 40)),
            Trip::new("D", "C", hm(7, 45), hm(8, 15)),
        ];
        let schedules = compute_schedules(&trips);
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].trip_count(), 1);
        assert_eq!(
            chain(&schedules[1]),
            vec![("C".into(), "07:10".into()), ("D".into(), "07:45".into())]
        );
    }

    #[test]
    fn test_custom_rules() {
        let trips = vec![
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "A", hm(9, 5), hm(10, 0)),
        ];
        let scheduler = DutyScheduler::new().with_rules(DutyRules::new().with_min_turnaround(10));
        assert_eq!(scheduler.compute_schedules(&trips).len(), 2);
        assert_eq!(scheduler.rules().min_turnaround_minutes, 10);
    }

    #[test]
    fn test_unvalidated_extreme_rules_do_not_panic() {
        let trips = vec![
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "A", hm(9, 5), hm(10, 0)),
        ];
        let rules = DutyRules::new()
            .with_max_duty(i64::MAX)
            .with_gap_reset(i64::MAX);
        let schedules = DutyScheduler::new()
            .with_rules(rules)
            .compute_schedules(&trips);
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].trip_count(), 2);
    }

    #[test]
    fn test_reset_persists_for_later_trips() {
        // 06:00-09:55 on duty, 15 min break, then the window restarts at 10:10.
        // Without persisting the reset the 14:45 trip would be measured from
        // 06:00 and rejected.
        let trips = vec![
            Trip::new("A", "B", hm(6, 0), hm(9, 55)),
            Trip::new("B", "A", hm(10, 10), hm(12, 0)),
            Trip::new("A", "B", hm(12, 3), hm(14, 40)),
            Trip::new("B", "A", hm(14, 45), hm(15, 30)),
        ];
        let schedules = compute_schedules(&trips);
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].gap_resets(), 1);
        assert_eq!(schedules[0].window_start(), TimeDelta::minutes(10 * 60 + 10));
    }

    #[test]
    fn test_zero_length_and_duplicate_departures() {
        let trips = vec![
            Trip::new("A", "A", hm(8, 0), hm(8, 0)),
            Trip::new("A", "B", hm(8, 0), hm(8, 30)),
            Trip::new("A", "B", hm(8, 2), hm(8, 30)),
        ];
        let schedules = compute_schedules(&trips);
        // Second trip leaves 0 min after the first arrives: too short.
        // Third trip leaves 2 min after: accepted into the first schedule.
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].trip_count(), 2);
        assert_eq!(schedules[0].last_trip().departure, hm(8, 2));
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_schedules(&[]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let trips = vec![
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "C", hm(9, 10), hm(9, 50)),
            Trip::new("C", "A", hm(9, 30), hm(10, 0)),
            Trip::new("C", "B", hm(10, 0), hm(10, 40)),
        ];
        assert_eq!(compute_schedules(&trips), compute_schedules(&trips));
    }
}
