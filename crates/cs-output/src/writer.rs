//! The `OutputWriter` trait implemented by tabular backends.

use cs_plan::ScheduleRun;

use crate::{AssignmentRow, OutputResult, TimetableRow};

/// Trait implemented by the CSV writer.
pub trait OutputWriter {
    /// Write a batch of timetable rows.
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()>;

    /// Write a batch of assignment rows.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every row of `run` to `writer`, then finish it.
pub fn write_run<W: OutputWriter>(writer: &mut W, run: &ScheduleRun) -> OutputResult<()> {
    writer.write_timetable(&TimetableRow::from_timetable(&run.timetable))?;
    writer.write_assignments(&AssignmentRow::from_roster(&run.roster))?;
    writer.finish()
}
