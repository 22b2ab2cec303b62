//! Roster properties over generated timetables.

use std::collections::HashMap;

use turn_schedule::config::DutyRules;
use turn_schedule::generator::{generate_trips, GeneratorConfig};
use turn_schedule::models::{Schedule, Trip};
use turn_schedule::scheduler::{compute_schedules, prepare_trips, DutyScheduler};
use turn_schedule::validation::validate_roster;

const SEEDS: [u64; 6] = [1, 7, 42, 99, 2024, 31337];

fn timetable(seed: u64) -> Vec<Trip> {
    let config = GeneratorConfig::default()
        .with_trips(120)
        .with_locations(3)
        .with_seed(seed);
    prepare_trips(generate_trips(&config).unwrap())
}

fn key(trip: &Trip) -> String {
    format!(
        "{}|{}|{}|{}",
        trip.origin, trip.destination, trip.departure, trip.arrival
    )
}

fn counts<'a>(trips: impl Iterator<Item = &'a Trip>) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for trip in trips {
        *map.entry(key(trip)).or_insert(0) += 1;
    }
    map
}

#[test]
fn test_every_trip_placed_exactly_once() {
    for seed in SEEDS {
        let trips = timetable(seed);
        let schedules = compute_schedules(&trips);

        let placed: usize = schedules.iter().map(Schedule::trip_count).sum();
        assert_eq!(placed, trips.len(), "seed {seed}");
        assert_eq!(
            counts(trips.iter()),
            counts(schedules.iter().flat_map(|s| s.trips())),
            "seed {seed}"
        );
    }
}

#[test]
fn test_continuity_and_turnaround_floor() {
    let rules = DutyRules::default();
    for seed in SEEDS {
        let schedules = compute_schedules(&timetable(seed));
        for schedule in &schedules {
            for pair in schedule.trips().windows(2) {
                assert_eq!(pair[0].destination, pair[1].origin, "seed {seed}");
                assert!(
                    pair[1].departure_offset() >= pair[0].arrival_offset() + rules.min_turnaround(),
                    "seed {seed}"
                );
            }
        }
    }
}

#[test]
fn test_duty_cap_holds_between_resets() {
    let rules = DutyRules::default();
    for seed in SEEDS {
        let schedules = compute_schedules(&timetable(seed));
        for schedule in &schedules {
            let trips = schedule.trips();
            let mut window_start = trips[0].departure_offset();
            for pair in trips.windows(2) {
                let gap = pair[1].departure_offset() - pair[0].arrival_offset();
                if gap >= rules.gap_reset() {
                    window_start = pair[1].departure_offset();
                } else {
                    assert!(
                        pair[0].arrival_offset() - window_start <= rules.max_duty(),
                        "seed {seed}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_audit_accepts_scheduler_output() {
    for seed in SEEDS {
        let trips = timetable(seed);
        let schedules = compute_schedules(&trips);
        assert_eq!(
            validate_roster(&trips, &schedules, &DutyRules::default()),
            Ok(()),
            "seed {seed}"
        );
    }
}

#[test]
fn test_deterministic_across_runs() {
    for seed in SEEDS {
        let trips = timetable(seed);
        let first = compute_schedules(&trips);
        let second = compute_schedules(&trips);
        assert_eq!(first, second, "seed {seed}");
    }
}

#[test]
fn test_shuttle_with_ten_minute_turns_stays_on_one_schedule() {
    // Two-stop shuttle with 10 minute turns all day.
    let mut trips = Vec::new();
    for i in 0..30u32 {
        let dep = chrono::NaiveTime::from_hms_opt(6, 0, 0).unwrap()
            + chrono::TimeDelta::minutes(i64::from(i) * 30);
        let arr = dep + chrono::TimeDelta::minutes(20);
        let (from, to) = if i % 2 == 0 { ("X", "Y") } else { ("Y", "X") };
        trips.push(Trip::new(from, to, dep, arr));
    }
    let trips = prepare_trips(trips);

    let strict = compute_schedules(&trips);
    let loose = DutyScheduler::new()
        .with_rules(DutyRules::new().with_max_duty(24 * 60))
        .compute_schedules(&trips);

    // Every turn is 10 minutes, so each one restarts the duty window.
    assert_eq!(strict.len(), 1);
    assert_eq!(loose.len(), 1);
    assert_eq!(strict[0].gap_resets(), 29);
}
