//! Synthetic trip generation.
//!
//! Produces a reproducible day of shuttle trips between `L1..Ln`, useful
//! for demos and for exercising the scheduler on larger inputs. The same
//! seed always yields the same trips.

use chrono::{NaiveTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::Trip;

/// Parameters for [`generate_trips`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of trips to produce.
    pub trips: usize,
    /// Number of distinct locations (at least 2).
    pub locations: usize,
    /// Earliest departure.
    pub first_departure: NaiveTime,
    /// Latest departure.
    pub last_departure: NaiveTime,
    /// Shortest trip (minutes).
    pub min_duration_minutes: i64,
    /// Longest trip (minutes).
    pub max_duration_minutes: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trips: 50,
            locations: 4,
            first_departure: NaiveTime::from_hms_opt(5, 0, 0).unwrap_or(NaiveTime::MIN),
            last_departure: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or(NaiveTime::MIN),
            min_duration_minutes: 15,
            max_duration_minutes: 90,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Sets the trip count.
    pub fn with_trips(mut self, trips: usize) -> Self {
        self.trips = trips;
        self
    }

    /// Sets the location count.
    pub fn with_locations(mut self, locations: usize) -> Self {
        self.locations = locations;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.locations < 2 {
            return Err(ScheduleError::InvalidConfig(
                "generator needs at least 2 locations".into(),
            ));
        }
        if self.first_departure > self.last_departure {
            return Err(ScheduleError::InvalidConfig(
                "first_departure is after last_departure".into(),
            ));
        }
        if self.min_duration_minutes < 0 || self.min_duration_minutes > self.max_duration_minutes {
            return Err(ScheduleError::InvalidConfig(format!(
                "bad duration range {}..={}",
                self.min_duration_minutes, self.max_duration_minutes
            )));
        }
        Ok(())
    }
}

/// Generates trips in departure order.
pub fn generate_trips(config: &GeneratorConfig) -> Result<Vec<Trip>> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let window = (config.last_departure - config.first_departure).num_minutes();
    let mut trips: Vec<Trip> = (0..config.trips)
        .map(|_| {
            let from = rng.random_range(0..config.locations);
            // shift by 1..n so destination differs from origin
            let to = (from + rng.random_range(1..config.locations)) % config.locations;
            let offset = rng.random_range(0..=window);
            let duration =
                rng.random_range(config.min_duration_minutes..=config.max_duration_minutes);

            let departure = config.first_departure + TimeDelta::minutes(offset);
            let arrival = departure + TimeDelta::minutes(duration);
            Trip::new(
                format!("L{}", from + 1),
                format!("L{}", to + 1),
                departure,
                arrival,
            )
        })
        .collect();

    trips.sort_by_key(|t| t.departure);
    debug!(trips = trips.len(), seed = config.seed, "synthetic trips generated");
    Ok(trips)
}
