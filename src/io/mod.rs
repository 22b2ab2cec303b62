//! File input and output around the scheduling core.
//!
//! - **`loader`**: CSV trip rows → `Trip`s, with row-level errors
//! - **`export`**: schedules → CSV or JSON files; trips → loader CSV

mod export;
mod loader;

pub use export::{export_schedules, write_schedules_csv, write_schedules_json, write_trips_csv};
pub use loader::{load_trips, parse_time, read_trips};
pub use loader::{ARRIVAL_TIME, DEPARTURE_TIME, DESTINATION, ORIGIN};
