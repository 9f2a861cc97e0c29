//! Unit tests for cs-output.

use cs_core::{Employee, NoJitter, Route, RunConfig, ScheduleWindow, ShiftKind};
use cs_plan::{PlanBuilder, ScheduleRun};
use cs_roster::NoopObserver;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn routes() -> Vec<Route> {
    vec![Route::new("R1", 40, 12.0, 10.0), Route::new("R3", 30, 8.0, 1.0)]
}

/// 06:00–06:30: R1 departs 06:00, 06:10, 06:20; R3 departs 06:00.
/// All four trips overlap, so each needs its own driver.
fn small_run(crew: Vec<Employee>) -> ScheduleRun {
    let config = RunConfig {
        window: ScheduleWindow::parse("06:00", "06:30").unwrap(),
        ..RunConfig::default()
    };
    PlanBuilder::new(config, routes())
        .employees(crew)
        .build()
        .unwrap()
        .run_with(&mut NoJitter, &mut NoopObserver)
}

fn crew(n: usize) -> Vec<Employee> {
    (1..=n)
        .map(|i| Employee::new(format!("E{i}"), format!("Driver {i}"), ShiftKind::Morning))
        .collect()
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::{OutputWriter, write_run};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("timetable.csv").exists());
        assert!(dir.path().join("assignments.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("timetable.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["route_id", "departure", "arrival"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["employee_id", "employee_name", "shift", "route_id", "start_time", "end_time"]
        );
    }

    #[test]
    fn run_rows_written() {
        let dir = tmp();
        let run = small_run(crew(4));
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_run(&mut w, &run).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("timetable.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "R1");
        assert_eq!(&rows[0][1], "06:00");
        assert_eq!(&rows[0][2], "06:40");
        assert_eq!(&rows[3][0], "R3");
        assert_eq!(&rows[3][2], "06:30");

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4, "four employees cover all four departures");
        assert!(rows.iter().all(|r| &r[2] == "morning"));
        assert_eq!(&rows[0][0], "E1");
        assert_eq!(&rows[0][1], "Driver 1");
    }

    #[test]
    fn after_midnight_times_wrap_to_wall_clock() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = crate::TimetableRow {
            route_id:  "R1".into(),
            departure: cs_core::ClockTime(1410),
            arrival:   cs_core::ClockTime(1450),
        };
        w.write_timetable(&[row]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("timetable.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "23:30");
        assert_eq!(&rows[0][2], "00:10");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::json::{write_json, write_json_file};

    #[test]
    fn json_contains_exchange_fields() {
        let run = small_run(crew(4));
        let mut buf = Vec::new();
        write_json(&mut buf, &run).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["timetable"][1]["routeId"], "R3");
        assert_eq!(v["timetable"][0]["departures"].as_array().unwrap().len(), 3);
        assert_eq!(v["roster"]["schedules"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn json_file_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        write_json_file(&path, &small_run(crew(1))).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"startTime\""));
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::report::{Report, format_work_time};

    #[test]
    fn work_time_format() {
        assert_eq!(format_work_time(0), "0 hours 0 minutes");
        assert_eq!(format_work_time(80), "1 hours 20 minutes");
        assert_eq!(format_work_time(420), "7 hours 0 minutes");
    }

    #[test]
    fn full_run_report() {
        let run = small_run(crew(4));
        let text = Report::new(&run, &routes()).to_string();

        assert!(text.contains("Route R1 (Priority 10): Every 10 minutes"));
        assert!(text.contains("Route R3 (Priority 1): Every 40 minutes"));
        assert!(text.contains("===== ROUTE SCHEDULES ====="));
        assert!(text.contains("Route R1 Schedule (Priority: 10, Frequency: 10 minutes):"));
        assert!(text.contains("Departure coverage: 100.0% (3/3 departures)"));
        assert!(text.contains("Total Morning Routes: 4, Assigned: 4"));
        assert!(text.contains("Total Evening Routes: 0, Assigned: 0"));
        assert!(text.contains("All routes assigned: Yes"));
        assert!(!text.contains("Consider adding more employees"));
        assert!(text.contains("Employee: Driver 1 (E1) - morning shift"));
    }

    #[test]
    fn partial_run_report() {
        let run = small_run(crew(1));
        let text = Report::new(&run, &routes()).to_string();

        assert!(text.contains("All routes assigned: No"));
        assert!(text.contains("Consider adding more employees"));
        assert!(text.contains("Total Morning Routes: 4, Assigned: 1"));
        // No strategy covers everything, so the rare-routes-first roster
        // (R3 06:00-06:30) is reported.
        assert!(text.contains("Strategy: rare_routes_first (attempts: 3)"));
        assert!(text.contains("  Route R3: 06:00 - 06:30"));
        assert!(text.contains("Total work time: 0 hours 30 minutes"));
    }
}
