//! `cs-output`: schedule run writers for the rust_crew scheduler.
//!
//! | Module       | Output                                                    |
//! |--------------|-----------------------------------------------------------|
//! | [`csv`]      | `timetable.csv`, `assignments.csv`                        |
//! | [`json`]     | the whole [`ScheduleRun`][cs_plan::ScheduleRun] as JSON   |
//! | [`report`]   | human-readable text report (`Display`)                    |
//!
//! Tabular backends implement [`OutputWriter`]; [`write_run`] drives any of
//! them from a finished run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cs_output::{CsvWriter, Report, write_run};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_run(&mut writer, &run)?;
//! println!("{}", Report::new(&run, &plan.routes));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{write_json, write_json_file};
pub use report::{Report, format_work_time};
pub use row::{AssignmentRow, TimetableRow};
pub use writer::{OutputWriter, write_run};
