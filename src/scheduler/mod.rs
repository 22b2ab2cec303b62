//! Turnaround annotation, duty scheduling, and roster metrics.
//!
//! # Pipeline
//!
//! `prepare_trips` sorts trips by departure (stable) and records the
//! informational turnaround of each. `DutyScheduler` then chains them into
//! schedules greedily, first-fit in schedule creation order, under the
//! minimum turnaround, duty cap, and gap-reset rules.
//!
//! # Summary
//!
//! `RosterSummary` reports schedule and trip counts, the longest duty
//! window, and how often duty windows restarted.

mod duty;
mod summary;
mod turnaround;

pub use duty::{compute_schedules, DutyScheduler};
pub use summary::RosterSummary;
pub use turnaround::{compute_turnarounds, prepare_trips, sort_by_departure};
