//! `cs-core`: foundational types for the `rust_crew` scheduler.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `RouteId`, `EmployeeId`                                   |
//! | [`time`]      | `ClockTime`, `Interval`                                   |
//! | [`config`]    | `RunConfig`, `ScheduleWindow`, `PeakBand`, `ShiftConfig`  |
//! | [`model`]     | `Route`, `Employee`, `ShiftKind`, `frequency_minutes`     |
//! | [`record`]    | Loosely typed input records and their normalization       |
//! | [`loader`]    | JSON / CSV loaders for route and employee records         |
//! | [`rng`]       | `JitterSource`, `SeededJitter`, `NoJitter`                |
//! | [`error`]     | `CrewError`, `CrewResult`                                 |

pub mod config;
pub mod error;
pub mod ids;
pub mod loader;
pub mod model;
pub mod record;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HourRange, PeakBand, RunConfig, ScheduleWindow, ShiftConfig};
pub use error::{CrewError, CrewResult};
pub use ids::{EmployeeId, RouteId};
pub use loader::{load_employees_csv, load_employees_json, load_routes_csv, load_routes_json};
pub use model::{DEFAULT_PRIORITY, Employee, Route, ShiftKind, frequency_minutes};
pub use record::{EmployeeRecord, RouteRecord};
pub use rng::{JitterSource, NoJitter, SeededJitter};
pub use time::{ClockTime, Interval};
