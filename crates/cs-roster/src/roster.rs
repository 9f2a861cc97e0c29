//! Assignment engine output types.

use serde::Serialize;

use cs_core::{ClockTime, EmployeeId, Interval, RouteId, ShiftKind};
use cs_timetable::Departure;

use crate::Strategy;

// ── Assignment ────────────────────────────────────────────────────────────────

/// One departure driven by one employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub route_id:   RouteId,
    pub start_time: ClockTime,
    pub end_time:   ClockTime,
}

impl Assignment {
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    #[inline]
    pub fn minutes(&self) -> u32 {
        self.interval().minutes()
    }
}

// ── EmployeeSchedule ──────────────────────────────────────────────────────────

/// An employee's assignments, sorted by start time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSchedule {
    pub employee_id:        EmployeeId,
    pub name:               String,
    pub shift:              ShiftKind,
    pub total_work_minutes: u32,
    pub assignments:        Vec<Assignment>,
}

impl EmployeeSchedule {
    /// `(route, count)` pairs in order of first appearance.
    pub fn route_distribution(&self) -> Vec<(&RouteId, usize)> {
        let mut dist: Vec<(&RouteId, usize)> = Vec::new();
        for a in &self.assignments {
            match dist.iter_mut().find(|(r, _)| *r == &a.route_id) {
                Some((_, n)) => *n += 1,
                None => dist.push((&a.route_id, 1)),
            }
        }
        dist
    }
}

// ── Coverage ──────────────────────────────────────────────────────────────────

/// How many of a bucket's departures received an employee.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub assigned: usize,
    pub total:    usize,
}

impl Coverage {
    #[inline]
    pub fn is_full(&self) -> bool {
        self.assigned == self.total
    }

    /// Percentage covered; an empty bucket counts as 0 %.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.assigned as f64 / self.total as f64 * 100.0
        }
    }
}

impl std::ops::Add for Coverage {
    type Output = Coverage;

    fn add(self, rhs: Coverage) -> Coverage {
        Coverage {
            assigned: self.assigned + rhs.assigned,
            total:    self.total + rhs.total,
        }
    }
}

/// Coverage per shift.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShiftCoverage {
    pub morning: Coverage,
    pub evening: Coverage,
}

impl ShiftCoverage {
    #[inline]
    pub fn get(&self, kind: ShiftKind) -> Coverage {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Evening => self.evening,
        }
    }

    pub(crate) fn set(&mut self, kind: ShiftKind, coverage: Coverage) {
        match kind {
            ShiftKind::Morning => self.morning = coverage,
            ShiftKind::Evening => self.evening = coverage,
        }
    }

    #[inline]
    pub fn combined(&self) -> Coverage {
        self.morning + self.evening
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.morning.is_full() && self.evening.is_full()
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Result of one [`crate::AssignmentEngine::assign`] call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Roster {
    /// One entry per input employee, in input order.
    pub schedules:  Vec<EmployeeSchedule>,
    pub coverage:   ShiftCoverage,
    /// Departures no employee could take, in time order per shift.
    pub unassigned: Vec<Departure>,
    /// Strategy of the attempt this roster came from.
    pub strategy:   Strategy,
    /// Attempts the engine ran before returning.
    pub attempts:   u8,
}

impl Roster {
    pub fn schedule_for(&self, employee: &EmployeeId) -> Option<&EmployeeSchedule> {
        self.schedules.iter().find(|s| &s.employee_id == employee)
    }

    /// Every `(employee, assignment)` pair on `route`, sorted by start time.
    pub fn assignments_on(&self, route: &RouteId) -> Vec<(&EmployeeSchedule, &Assignment)> {
        let mut out: Vec<_> = self
            .schedules
            .iter()
            .flat_map(|s| s.assignments.iter().map(move |a| (s, a)))
            .filter(|(_, a)| &a.route_id == route)
            .collect();
        out.sort_by_key(|(_, a)| a.start_time);
        out
    }

    /// Total assignments across all employees.
    pub fn assignment_count(&self) -> usize {
        self.schedules.iter().map(|s| s.assignments.len()).sum()
    }
}
