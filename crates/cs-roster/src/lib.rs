//! `cs-roster`: assigns timetable departures to crew members.
//!
//! # Attempt loop
//!
//! ```text
//! for strategy in [TimeOrder, PriorityFirst, RareRoutesFirst] (up to max_attempts):
//!   for shift in [morning, evening]:
//!     ① Bucket    - departures whose start hour lies in the shift
//!     ② Sort      - by the strategy's ordering
//!     ③ Pass 1    - cheapest available, conflict-free employee
//!                   cost = w_work * minutes/10 + w_variety * 20 * visits + jitter
//!     ④ Pass 2    - leftovers by time → least-loaded conflict-free employee
//!   stop early on full coverage; otherwise keep the best attempt
//! ```
//!
//! The engine never fails on infeasibility: missing crew shows up as
//! `assigned < total` in [`ShiftCoverage`] and in [`Roster::unassigned`].
//!
//! All working state (availability, work minutes, route visits) is rebuilt
//! for every attempt and dropped when the call returns.

pub mod engine;
pub mod observer;
pub mod roster;
pub mod state;
pub mod strategy;


pub use engine::AssignmentEngine;
pub use observer::{AttemptObserver, NoopObserver};
pub use roster::{Assignment, Coverage, EmployeeSchedule, Roster, ShiftCoverage};
pub use strategy::{CostWeights, Strategy};
