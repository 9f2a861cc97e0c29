//! `cs-timetable`: departure timetables and workforce sizing.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`departure`]   | `Departure`, `RouteTimetable`, `Timetable`            |
//! | [`generator`]   | `generate_timetable`                                  |
//! | [`sizing`]      | `estimate_workforce`, `WorkforceEstimate`             |
//! | [`error`]       | `TimetableError`, `TimetableResult<T>`                |
//!
//! # Generation model (summary)
//!
//! ```text
//! next_due[r] = window.start
//! for t in window (variable step: 10 min, or peak_frequency / 2 in a band):
//!     for r where next_due[r] ≤ t:
//!         emit departure (r, t)
//!         next_due[r] = t + max(10, floor(frequency(r) * peak_factor(t)))
//! ```
//!
//! No randomness is involved: identical inputs give identical timetables.

pub mod departure;
pub mod error;
pub mod generator;
pub mod sizing;

#[cfg(test)]
mod tests;

pub use departure::{Departure, RouteTimetable, Timetable};
pub use error::{TimetableError, TimetableResult};
pub use generator::generate_timetable;
pub use sizing::{ShiftDemand, WorkforceEstimate, estimate_workforce, headcount_for};
