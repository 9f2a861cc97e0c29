//! Advisory workforce sizing.
//!
//! For each shift, the drive minutes of every departure bucketed into that
//! shift are divided by 90 % of the per-employee work-time target and
//! rounded up.  The 10 % buffer deliberately over-provisions.
//!
//! The estimate says nothing about whether the assignment engine can
//! actually reach full coverage with that many people; interval conflicts
//! can leave departures uncovered at any headcount.  Callers must read the
//! engine's own coverage counts.

use serde::Serialize;

use cs_core::{CrewError, ShiftConfig, ShiftKind};

use crate::{Timetable, TimetableResult};

/// Drive minutes and headcount target for one shift.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDemand {
    pub drive_minutes: u32,
    pub headcount:     u32,
}

/// Headcount estimate for both shifts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WorkforceEstimate {
    pub morning: ShiftDemand,
    pub evening: ShiftDemand,
}

impl WorkforceEstimate {
    #[inline]
    pub fn get(&self, kind: ShiftKind) -> ShiftDemand {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Evening => self.evening,
        }
    }

    pub fn total_headcount(&self) -> u32 {
        self.morning.headcount + self.evening.headcount
    }
}

/// `ceil(minutes / (required_work_minutes * 0.9))`, in exact integer math.
///
/// Returns 0 when `required_work_minutes` is 0; [`estimate_workforce`]
/// rejects that case before calling.
#[inline]
pub fn headcount_for(drive_minutes: u32, required_work_minutes: u32) -> u32 {
    if required_work_minutes == 0 {
        return 0;
    }
    let numerator = drive_minutes as u64 * 10;
    let denominator = required_work_minutes as u64 * 9;
    numerator.div_ceil(denominator) as u32
}

/// Aggregate drive minutes per shift and convert them to headcount targets.
pub fn estimate_workforce(
    timetable: &Timetable,
    shifts: &ShiftConfig,
    required_work_minutes: u32,
) -> TimetableResult<WorkforceEstimate> {
    if required_work_minutes == 0 {
        return Err(CrewError::Config("required_work_minutes must be positive".into()).into());
    }

    let demand = |kind: ShiftKind| {
        let drive_minutes = timetable
            .departures_in(shifts, kind)
            .iter()
            .map(|d| d.duration_minutes())
            .sum();
        ShiftDemand {
            drive_minutes,
            headcount: headcount_for(drive_minutes, required_work_minutes),
        }
    };

    Ok(WorkforceEstimate {
        morning: demand(ShiftKind::Morning),
        evening: demand(ShiftKind::Evening),
    })
}
