//! Turnaround annotation.
//!
//! Orders trips by departure and records, for each trip, the whole minutes
//! between its departure and the previous trip's arrival in that order.
//! The figure is diagnostic; the duty scheduler measures turnaround against
//! the last trip of each candidate schedule instead.

use tracing::debug;

use crate::models::Trip;

/// Sorts trips by departure, keeping input order for equal departures.
pub fn sort_by_departure(trips: &mut [Trip]) {
    // `sort_by_key` is stable
    trips.sort_by_key(|t| t.departure);
}

/// Fills in `turnaround_minutes` for trips already in departure order.
///
/// Fractional minutes truncate toward zero. The first trip gets 0. A trip
/// leaving before its predecessor arrives gets a negative value.
pub fn compute_turnarounds(trips: &mut [Trip]) {
    let mut previous_arrival = None;
    for trip in trips.iter_mut() {
        trip.turnaround_minutes = match previous_arrival {
            Some(arrival) => (trip.departure_offset() - arrival).num_minutes(),
            None => 0,
        };
        previous_arrival = Some(trip.arrival_offset());
    }
}

/// Sorts and annotates trips, ready for the duty scheduler.
pub fn prepare_trips(mut trips: Vec<Trip>) -> Vec<Trip> {
    sort_by_departure(&mut trips);
    compute_turnarounds(&mut trips);
    debug!(trips = trips.len(), "trips sorted and annotated");
    trips
}
