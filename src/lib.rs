//! Turn schedule builder.
//!
//! Chains timestamped point-to-point trips into duty schedules (vehicle
//! blocks or crew duties). Each schedule connects trips by location, keeps
//! a minimum turnaround between them, and caps continuous duty time, with
//! long idle gaps restarting the duty window.
//!
//! # Modules
//!
//! - **`models`**: `Trip`, `Schedule`
//! - **`scheduler`**: turnaround annotation, the greedy first-fit
//!   `DutyScheduler`, and `RosterSummary`
//! - **`format`**: schedule chains and export records
//! - **`validation`**: roster audit (coverage, continuity, turnaround, duty)
//! - **`io`**: CSV trip loading; CSV/JSON roster export
//! - **`generator`**: seeded synthetic trips
//! - **`config`**, **`error`**, **`logging`**: run settings, error type, tracing setup
//!
//! # Example
//!
//! ```
//! use turn_schedule::config::OvernightPolicy;
//! use turn_schedule::format::format_schedule;
//! use turn_schedule::io::read_trips;
//! use turn_schedule::scheduler::{compute_schedules, prepare_trips};
//!
//! let csv = "origin,destination,departure_time,arrival_time\n\
//!            B,A,09:05,10:00\n\
//!            A,B,08:00,09:00\n";
//! let trips = prepare_trips(read_trips(csv.as_bytes(), OvernightPolicy::RollOver)?);
//! let schedules = compute_schedules(&trips);
//!
//! assert_eq!(schedules.len(), 1);
//! assert_eq!(format_schedule(&schedules[0]), "A 08:00 → B; B 09:05 → A");
//! # Ok::<(), turn_schedule::error::ScheduleError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod io;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod validation;
