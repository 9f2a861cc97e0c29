//! `cs-plan`: pipeline orchestration for the rust_crew scheduler.
//!
//! # Pipeline
//!
//! ```text
//! PlanBuilder::build():
//!   ① validate RunConfig and inputs (fail fast)
//!   ② generate_timetable(routes, window)
//!   ③ estimate_workforce(timetable, shifts, required_work_minutes)
//!   ④ employees: supplied, or synthesized from the estimate
//! Plan::run():
//!   ⑤ AssignmentEngine::assign_observed(departures, employees, jitter)
//!   ⑥ ScheduleRun { timetable, workforce, roster, totals }
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_core::RunConfig;
//! use cs_plan::PlanBuilder;
//!
//! let plan = PlanBuilder::new(RunConfig::default(), routes)
//!     .employees(employees)
//!     .build()?;
//! let run = plan.run();
//! println!("{}", run.totals.combined_percent());
//! ```

pub mod builder;
pub mod error;
pub mod plan;
pub mod run;

#[cfg(test)]
mod tests;

pub use builder::PlanBuilder;
pub use error::{PlanError, PlanResult};
pub use plan::Plan;
pub use run::{ScheduleRun, ShiftSummary, ShiftTotals};
