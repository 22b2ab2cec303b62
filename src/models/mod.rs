//! Trip and schedule models.
//!
//! | turn-schedule | Transit | Crew rostering |
//! |---------------|---------|----------------|
//! | Trip | Vehicle journey leg | Piece of work |
//! | Schedule | Vehicle block | Duty |

mod schedule;
mod trip;

pub use schedule::{Admission, Rejection, Schedule};
pub use trip::Trip;

#[cfg(test)]
pub(crate) use trip::hm;
