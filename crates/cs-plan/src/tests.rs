//! Unit tests for cs-plan.

use cs_core::{CrewError, Employee, NoJitter, Route, RunConfig, ScheduleWindow, ShiftKind};
use cs_roster::NoopObserver;
use cs_timetable::TimetableError;

use crate::{PlanBuilder, PlanError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reference_routes() -> Vec<Route> {
    vec![
        Route::new("R1", 40, 12.0, 10.0),
        Route::new("R2", 40, 9.5, 5.0),
        Route::new("R3", 30, 6.0, 1.0),
    ]
}

fn config(start: &str, end: &str) -> RunConfig {
    RunConfig {
        window: ScheduleWindow::parse(start, end).unwrap(),
        ..RunConfig::default()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn synthesizes_crew_from_estimate() {
        let plan = PlanBuilder::new(config("06:00", "01:00"), reference_routes())
            .build()
            .unwrap();
        let morning = plan.workforce.morning.headcount as usize;
        let evening = plan.workforce.evening.headcount as usize;
        assert!(morning > 0 && evening > 0);
        assert_eq!(plan.employees.len(), morning + evening);
        assert_eq!(plan.employees[0].id.as_str(), "E1");
        assert_eq!(plan.employees[0].shift, ShiftKind::Morning);
        assert_eq!(plan.employees[morning].shift, ShiftKind::Evening);
    }

    #[test]
    fn supplied_crew_is_kept() {
        let crew = vec![Employee::new("A", "Ana", ShiftKind::Morning)];
        let plan = PlanBuilder::new(config("06:00", "01:00"), reference_routes())
            .employees(crew.clone())
            .build()
            .unwrap();
        assert_eq!(plan.employees, crew);
    }

    #[test]
    fn empty_routes_rejected() {
        let res = PlanBuilder::new(RunConfig::default(), Vec::new()).build();
        assert!(matches!(res, Err(PlanError::Timetable(TimetableError::NoRoutes))));
    }

    #[test]
    fn duplicate_employees_rejected() {
        let crew = vec![
            Employee::new("A", "Ana", ShiftKind::Morning),
            Employee::new("A", "Ari", ShiftKind::Evening),
        ];
        let res = PlanBuilder::new(RunConfig::default(), reference_routes())
            .employees(crew)
            .build();
        assert!(matches!(
            res,
            Err(PlanError::Core(CrewError::DuplicateId { what: "employee", .. }))
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = RunConfig { required_work_minutes: 0, ..RunConfig::default() };
        let res = PlanBuilder::new(cfg, reference_routes()).build();
        assert!(matches!(res, Err(PlanError::Core(CrewError::Config(_)))));
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn totals_match_timetable_and_roster() {
        let plan = PlanBuilder::new(config("06:00", "01:00"), reference_routes())
            .build()
            .unwrap();
        let run = plan.run();

        let combined = run.totals.combined();
        assert_eq!(combined.total, run.timetable.total_departures());
        assert_eq!(combined.assigned + run.roster.unassigned.len(), combined.total);
        assert_eq!(run.totals.morning.required_headcount, plan.workforce.morning.headcount);
        assert_eq!(run.totals.evening.drive_minutes, plan.workforce.evening.drive_minutes);

        let per_route: usize = plan
            .routes
            .iter()
            .map(|r| run.route_coverage(&r.id).assigned)
            .sum();
        assert_eq!(per_route, combined.assigned);
    }

    #[test]
    fn runs_are_reproducible() {
        let plan = PlanBuilder::new(config("06:00", "01:00"), reference_routes())
            .build()
            .unwrap();
        assert_eq!(plan.run(), plan.run());
    }

    #[test]
    fn crew_size_drives_coverage() {
        // R1 departs 06:00, 06:10, 06:20; every trip lasts 40 minutes.
        let routes = vec![Route::new("R1", 40, 12.0, 10.0)];
        let solo = PlanBuilder::new(config("06:00", "06:30"), routes.clone())
            .employees(vec![Employee::new("A", "Ana", ShiftKind::Morning)])
            .build()
            .unwrap()
            .run_with(&mut NoJitter, &mut NoopObserver);
        assert_eq!(solo.totals.morning.assigned, 1);
        assert_eq!(solo.totals.morning.total, 3);
        assert!(!solo.is_fully_assigned());
        assert_eq!(solo.active_employees(), 1);

        let crew = (1..=3)
            .map(|i| Employee::new(format!("E{i}"), format!("Driver {i}"), ShiftKind::Morning))
            .collect();
        let full = PlanBuilder::new(config("06:00", "06:30"), routes)
            .employees(crew)
            .build()
            .unwrap()
            .run_with(&mut NoJitter, &mut NoopObserver);
        assert!(full.is_fully_assigned());
        assert_eq!(full.active_employees(), 3);
        assert_eq!(full.route_coverage(&"R1".into()).percent(), 100.0);
    }

    #[test]
    fn serializes_exchange_shape() {
        let routes = vec![Route::new("R1", 40, 12.0, 10.0)];
        let run = PlanBuilder::new(config("06:00", "06:30"), routes)
            .employees(vec![Employee::new("A", "Ana", ShiftKind::Morning)])
            .build()
            .unwrap()
            .run_with(&mut NoJitter, &mut NoopObserver);

        let v = serde_json::to_value(&run).unwrap();
        assert_eq!(v["timetable"][0]["routeId"], "R1");
        assert_eq!(v["timetable"][0]["departures"][2], "06:20");
        let a = &v["roster"]["schedules"][0]["assignments"][0];
        assert_eq!(a["routeId"], "R1");
        assert_eq!(a["startTime"], "06:00");
        assert_eq!(a["endTime"], "06:40");
        assert_eq!(v["totals"]["morning"]["total"], 3);

        let schedule = &v["roster"]["schedules"][0];
        assert_eq!(schedule["employeeId"], "A");
        assert_eq!(schedule["totalWorkMinutes"], 40);
        assert!(schedule.get("employee_id").is_none());
        assert!(v["totals"]["morning"].get("requiredHeadcount").is_some());
        assert!(v["workforce"]["morning"].get("driveMinutes").is_some());
    }
}
