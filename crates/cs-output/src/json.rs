//! JSON export of a whole run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cs_plan::ScheduleRun;

use crate::OutputResult;

/// Pretty-print `run` to `writer`.
pub fn write_json<W: Write>(writer: W, run: &ScheduleRun) -> OutputResult<()> {
    serde_json::to_writer_pretty(writer, run)?;
    Ok(())
}

/// Write `run` to `path`, replacing any existing file.
pub fn write_json_file(path: &Path, run: &ScheduleRun) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_json(&mut out, run)?;
    out.flush()?;
    Ok(())
}
