//! Plain data row types written by tabular backends.

use cs_core::{ClockTime, ShiftKind};
use cs_roster::Roster;
use cs_timetable::Timetable;

/// One generated departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    pub route_id:  String,
    pub departure: ClockTime,
    pub arrival:   ClockTime,
}

/// One departure driven by one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub employee_id:   String,
    pub employee_name: String,
    pub shift:         ShiftKind,
    pub route_id:      String,
    pub start_time:    ClockTime,
    pub end_time:      ClockTime,
}

impl TimetableRow {
    /// Rows in timetable order: routes in input order, then time.
    pub fn from_timetable(timetable: &Timetable) -> Vec<TimetableRow> {
        timetable
            .departures()
            .into_iter()
            .map(|d| TimetableRow {
                route_id:  d.route.to_string(),
                departure: d.start,
                arrival:   d.end,
            })
            .collect()
    }
}

impl AssignmentRow {
    /// Rows grouped by employee in roster order, each employee's rows by
    /// start time.
    pub fn from_roster(roster: &Roster) -> Vec<AssignmentRow> {
        roster
            .schedules
            .iter()
            .flat_map(|s| {
                s.assignments.iter().map(move |a| AssignmentRow {
                    employee_id:   s.employee_id.to_string(),
                    employee_name: s.name.clone(),
                    shift:         s.shift,
                    route_id:      a.route_id.to_string(),
                    start_time:    a.start_time,
                    end_time:      a.end_time,
                })
            })
            .collect()
    }
}
