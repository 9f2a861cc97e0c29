//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `timetable.csv`
//! - `assignments.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, OutputResult, TimetableRow};

/// Writes a schedule run to two CSV files.
///
/// Times are written as wall-clock `HH:MM`.
pub struct CsvWriter {
    timetable:   Writer<File>,
    assignments: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut timetable = Writer::from_path(dir.join("timetable.csv"))?;
        timetable.write_record(["route_id", "departure", "arrival"])?;

        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record([
            "employee_id",
            "employee_name",
            "shift",
            "route_id",
            "start_time",
            "end_time",
        ])?;

        Ok(Self { timetable, assignments, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()> {
        for row in rows {
            self.timetable.write_record(&[
                row.route_id.clone(),
                row.departure.format(),
                row.arrival.format(),
            ])?;
        }
        Ok(())
    }

    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.employee_id.clone(),
                row.employee_name.clone(),
                row.shift.to_string(),
                row.route_id.clone(),
                row.start_time.format(),
                row.end_time.format(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.timetable.flush()?;
        self.assignments.flush()?;
        Ok(())
    }
}
