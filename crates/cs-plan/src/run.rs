//! The result of one planning run.

use serde::Serialize;

use cs_core::{RouteId, ShiftKind};
use cs_roster::{Coverage, Roster};
use cs_timetable::{Timetable, WorkforceEstimate};

// ── Shift totals ──────────────────────────────────────────────────────────────

/// Assignment counts and the headcount estimate for one shift.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    pub assigned:           usize,
    pub total:              usize,
    pub drive_minutes:      u32,
    pub required_headcount: u32,
}

impl ShiftSummary {
    #[inline]
    pub fn coverage(&self) -> Coverage {
        Coverage { assigned: self.assigned, total: self.total }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShiftTotals {
    pub morning: ShiftSummary,
    pub evening: ShiftSummary,
}

impl ShiftTotals {
    #[inline]
    pub fn get(&self, kind: ShiftKind) -> ShiftSummary {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Evening => self.evening,
        }
    }

    pub fn combined(&self) -> Coverage {
        self.morning.coverage() + self.evening.coverage()
    }

    /// Share of all departures that received an employee, in percent.
    pub fn combined_percent(&self) -> f64 {
        self.combined().percent()
    }
}

// ── ScheduleRun ───────────────────────────────────────────────────────────────

/// Timetable, crew schedules and per-shift totals of one run.
///
/// Serializes to the exchange shape: per-route `hh:mm` departure arrays and
/// per-employee `{routeId, startTime, endTime}` arrays.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScheduleRun {
    pub timetable: Timetable,
    pub workforce: WorkforceEstimate,
    pub roster:    Roster,
    pub totals:    ShiftTotals,
}

impl ScheduleRun {
    pub fn new(timetable: Timetable, workforce: WorkforceEstimate, roster: Roster) -> Self {
        let summary = |kind: ShiftKind| {
            let coverage = roster.coverage.get(kind);
            let demand = workforce.get(kind);
            ShiftSummary {
                assigned:           coverage.assigned,
                total:              coverage.total,
                drive_minutes:      demand.drive_minutes,
                required_headcount: demand.headcount,
            }
        };
        let totals = ShiftTotals {
            morning: summary(ShiftKind::Morning),
            evening: summary(ShiftKind::Evening),
        };
        Self { timetable, workforce, roster, totals }
    }

    /// `true` when every generated departure has an employee.
    pub fn is_fully_assigned(&self) -> bool {
        self.roster.coverage.is_full()
    }

    /// Departures scheduled on `route` against those that received an
    /// employee.
    pub fn route_coverage(&self, route: &RouteId) -> Coverage {
        Coverage {
            assigned: self.roster.assignments_on(route).len(),
            total:    self.timetable.get(route).map_or(0, <[_]>::len),
        }
    }

    /// Employees holding at least one assignment.
    pub fn active_employees(&self) -> usize {
        self.roster.schedules.iter().filter(|s| !s.assignments.is_empty()).count()
    }
}
