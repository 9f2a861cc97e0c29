//! Human-readable run report.
//!
//! Sections, in order: route frequencies and headcount estimate, one
//! departure table per route, assignment statistics, and one block per
//! employee with route distribution and total work time.

use std::fmt;

use cs_core::{Route, ShiftKind};
use cs_plan::ScheduleRun;
use cs_roster::EmployeeSchedule;

const RULE_WIDTH: usize = 45;

/// Renders a [`ScheduleRun`] as text via `Display`.
///
/// `routes` supplies priorities and frequencies for the headings; routes
/// missing from the timetable are skipped.
pub struct Report<'a> {
    run:    &'a ScheduleRun,
    routes: &'a [Route],
}

impl<'a> Report<'a> {
    pub fn new(run: &'a ScheduleRun, routes: &'a [Route]) -> Self {
        Self { run, routes }
    }

    fn write_frequencies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route Frequencies:")?;
        for route in self.routes {
            writeln!(
                f,
                "Route {} (Priority {}): Every {} minutes",
                route.label(),
                route.priority,
                route.frequency()
            )?;
        }
        let w = &self.run.workforce;
        writeln!(
            f,
            "Adjusted required employees: Morning: {}, Evening: {}",
            w.morning.headcount, w.evening.headcount
        )
    }

    fn write_route_tables(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n===== ROUTE SCHEDULES =====")?;
        for route in self.routes {
            if self.run.timetable.get(&route.id).is_none() {
                continue;
            }
            writeln!(
                f,
                "\nRoute {} Schedule (Priority: {}, Frequency: {} minutes):",
                route.label(),
                route.priority,
                route.frequency()
            )?;
            writeln!(f, "{:<10} {:<10} {:<15} {:<6}", "Start Time", "End Time", "Employee", "ID")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            for (schedule, a) in self.run.roster.assignments_on(&route.id) {
                writeln!(
                    f,
                    "{:<10} {:<10} {:<15} {:<6}",
                    a.start_time.to_string(),
                    a.end_time.to_string(),
                    schedule.name,
                    schedule.employee_id.as_str()
                )?;
            }

            let coverage = self.run.route_coverage(&route.id);
            writeln!(f, "\nScheduled departures: {}", coverage.total)?;
            writeln!(f, "Covered departures: {}", coverage.assigned)?;
            writeln!(
                f,
                "Departure coverage: {:.1}% ({}/{} departures)",
                coverage.percent(),
                coverage.assigned,
                coverage.total
            )?;
        }
        Ok(())
    }

    fn write_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = &self.run.totals;
        writeln!(f, "\n===== ASSIGNMENT STATISTICS =====")?;
        for kind in ShiftKind::ALL {
            let s = totals.get(kind);
            writeln!(f, "Total {} Routes: {}, Assigned: {}", title(kind), s.total, s.assigned)?;
        }
        writeln!(
            f,
            "Total Required Employees: Morning: {}, Evening: {}",
            totals.morning.required_headcount, totals.evening.required_headcount
        )?;
        writeln!(
            f,
            "Strategy: {} (attempts: {})",
            self.run.roster.strategy, self.run.roster.attempts
        )?;

        let all = self.run.is_fully_assigned();
        writeln!(f, "\nAll routes assigned: {}", if all { "Yes" } else { "No" })?;
        if !all {
            writeln!(
                f,
                "Routes not fully assigned. Consider adding more employees or adjusting scheduling parameters."
            )?;
        }
        Ok(())
    }

    fn write_employee(&self, f: &mut fmt::Formatter<'_>, s: &EmployeeSchedule) -> fmt::Result {
        writeln!(f, "\nEmployee: {} ({}) - {} shift", s.name, s.employee_id, s.shift)?;
        write!(f, "  Route distribution: ")?;
        for (route, count) in s.route_distribution() {
            write!(f, "{route}({count}) ")?;
        }
        writeln!(f)?;
        for a in &s.assignments {
            writeln!(f, "  Route {}: {} - {}", a.route_id, a.start_time, a.end_time)?;
        }
        writeln!(f, "  Total work time: {}", format_work_time(s.total_work_minutes))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_frequencies(f)?;
        self.write_route_tables(f)?;
        self.write_statistics(f)?;
        writeln!(f, "\n===== EMPLOYEE SCHEDULES =====")?;
        for s in &self.run.roster.schedules {
            self.write_employee(f, s)?;
        }
        Ok(())
    }
}

/// `"H hours M minutes"`.
pub fn format_work_time(minutes: u32) -> String {
    format!("{} hours {} minutes", minutes / 60, minutes % 60)
}

fn title(kind: ShiftKind) -> &'static str {
    match kind {
        ShiftKind::Morning => "Morning",
        ShiftKind::Evening => "Evening",
    }
}
