//! Unit tests for cs-timetable.

use cs_core::{ClockTime, PeakBand, Route, ScheduleWindow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hm(s: &str) -> ClockTime {
    ClockTime::parse(s).unwrap()
}

fn times(list: &[&str]) -> Vec<ClockTime> {
    list.iter().map(|s| hm(s)).collect()
}

/// R1 (priority 10, 40 min), R2 (priority 5, 40 min), R3 (priority 1, 30 min).
fn reference_routes() -> Vec<Route> {
    vec![
        Route::new("R1", 40, 12.0, 10.0),
        Route::new("R2", 40, 18.0, 5.0),
        Route::new("R3", 30, 8.0, 1.0),
    ]
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;
    use crate::generator::effective_headway;
    use crate::{TimetableError, generate_timetable};

    #[test]
    fn reference_scenario_without_peaks() {
        let routes = reference_routes();
        assert_eq!(routes[0].frequency(), 10);
        assert_eq!(routes[1].frequency(), 26);
        assert_eq!(routes[2].frequency(), 40);

        let window = ScheduleWindow::parse("06:00", "01:00").unwrap();
        let tt = generate_timetable(&routes, &window).unwrap();

        let r1 = tt.get(&"R1".into()).unwrap();
        assert_eq!(&r1[..3], times(&["06:00", "06:10", "06:20"]).as_slice());

        // R2 is due at 06:26 but the cursor only stops every 10 minutes.
        let r2 = tt.get(&"R2".into()).unwrap();
        assert_eq!(&r2[..3], times(&["06:00", "06:30", "07:00"]).as_slice());

        let r3 = tt.get(&"R3".into()).unwrap();
        assert_eq!(&r3[..3], times(&["06:00", "06:40", "07:20"]).as_slice());
    }

    #[test]
    fn window_end_is_exclusive_and_rolls_past_midnight() {
        let routes = vec![Route::new("R1", 40, 12.0, 10.0)];
        let window = ScheduleWindow::parse("06:00", "01:00").unwrap();
        let tt = generate_timetable(&routes, &window).unwrap();
        let r1 = tt.get(&"R1".into()).unwrap();

        // 06:00 .. 00:50 next day, every 10 minutes.
        assert_eq!(r1.len(), 114);
        let last = *r1.last().unwrap();
        assert_eq!(last, ClockTime(24 * 60 + 50));
        assert_eq!(last.to_string(), "00:50");
    }

    #[test]
    fn peak_band_shortens_step_and_headway() {
        let routes = vec![Route::new("R1", 20, 5.0, 10.0)];
        let window = ScheduleWindow::parse("07:40", "09:00")
            .unwrap()
            .with_peak_band(PeakBand::new(8, 10, 30));
        let tt = generate_timetable(&routes, &window).unwrap();
        assert_eq!(
            tt.get(&"R1".into()).unwrap(),
            times(&["07:40", "07:50", "08:00", "08:15", "08:30", "08:45"]).as_slice()
        );
    }

    #[test]
    fn low_priority_route_runs_more_often_in_peak() {
        let routes = vec![Route::new("R3", 30, 8.0, 1.0)];
        let window = ScheduleWindow::parse("08:00", "10:00")
            .unwrap()
            .with_peak_band(PeakBand::new(8, 10, 20));
        let tt = generate_timetable(&routes, &window).unwrap();
        // Headway floor(40 * 0.7) = 28; the route leaves on the first tick at or after due.
        assert_eq!(
            tt.get(&"R3".into()).unwrap(),
            times(&["08:00", "08:30", "09:00", "09:30"]).as_slice()
        );
    }

    #[test]
    fn effective_headway_values() {
        assert_eq!(effective_headway(40, false), 40);
        assert_eq!(effective_headway(40, true), 28);
        assert_eq!(effective_headway(26, true), 18);
        assert_eq!(effective_headway(10, true), 10, "floored at 10");
    }

    #[test]
    fn idempotent() {
        let routes = reference_routes();
        let window = ScheduleWindow::default();
        let a = generate_timetable(&routes, &window).unwrap();
        let b = generate_timetable(&routes, &window).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn flattening_preserves_route_then_time_order() {
        let routes = reference_routes();
        let window = ScheduleWindow::parse("06:00", "07:00").unwrap();
        let tt = generate_timetable(&routes, &window).unwrap();
        let deps = tt.departures();
        assert_eq!(deps.len(), tt.total_departures());
        assert_eq!(deps[0].route.as_str(), "R1");
        assert_eq!(deps[0].end, hm("06:40"));
        assert_eq!(deps[0].priority, 10.0);
        assert_eq!(deps.last().unwrap().route.as_str(), "R3");
    }

    #[test]
    fn rejects_empty_route_list() {
        let err = generate_timetable(&[], &ScheduleWindow::default()).unwrap_err();
        assert!(matches!(err, TimetableError::NoRoutes));
    }

    #[test]
    fn rejects_zero_duration_and_duplicates() {
        let zero = vec![Route::new("R1", 0, 1.0, 5.0)];
        assert!(matches!(
            generate_timetable(&zero, &ScheduleWindow::default()),
            Err(TimetableError::ZeroDuration(_))
        ));

        let dup = vec![Route::new("R1", 10, 1.0, 5.0), Route::new("R1", 20, 1.0, 5.0)];
        assert!(matches!(
            generate_timetable(&dup, &ScheduleWindow::default()),
            Err(TimetableError::DuplicateRoute(_))
        ));
    }

    #[test]
    fn rejects_invalid_window() {
        let window = ScheduleWindow::parse("06:00", "06:00").unwrap();
        assert!(matches!(
            generate_timetable(&reference_routes(), &window),
            Err(TimetableError::Core(_))
        ));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::generate_timetable;

    fn window_strategy() -> impl Strategy<Value = ScheduleWindow> {
        (0u32..24, 0u32..24, proptest::option::of((0u32..23, 1u32..4, 2u32..60)))
            .prop_filter("window must not be empty", |(s, e, _)| s != e)
            .prop_map(|(s, e, band)| {
                let mut w = ScheduleWindow::new(ClockTime::from_hour(s), ClockTime::from_hour(e));
                if let Some((start, len, freq)) = band {
                    w = w.with_peak_band(PeakBand::new(start, (start + len).min(24), freq));
                }
                w
            })
    }

    fn routes_strategy() -> impl Strategy<Value = Vec<Route>> {
        proptest::collection::vec((1u32..120, 0.0..12.0f64), 1..6).prop_map(|v| {
            v.into_iter()
                .enumerate()
                .map(|(i, (dur, prio))| Route::new(format!("R{i}"), dur, 1.0, prio))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_departures_strictly_increasing_and_spaced(
            routes in routes_strategy(),
            window in window_strategy(),
        ) {
            let tt = generate_timetable(&routes, &window).unwrap();
            let end = window.end_instant();
            for rt in tt.routes() {
                prop_assert!(!rt.departures.is_empty());
                prop_assert_eq!(rt.departures[0], window.start);
                for pair in rt.departures.windows(2) {
                    prop_assert!(pair[1] > pair[0]);
                    prop_assert!(pair[1].minutes_since(pair[0]) >= 10);
                }
                prop_assert!(rt.departures.iter().all(|&t| t < end));
            }
        }

        #[test]
        fn prop_generation_is_idempotent(
            routes in routes_strategy(),
            window in window_strategy(),
        ) {
            let a = generate_timetable(&routes, &window).unwrap();
            let b = generate_timetable(&routes, &window).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

// ── Sizing ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sizing {
    use cs_core::ShiftConfig;

    use super::*;
    use crate::{generate_timetable, estimate_workforce, headcount_for};

    #[test]
    fn headcount_uses_ten_percent_buffer() {
        // ceil(1000 / 378) = ceil(2.645)
        assert_eq!(headcount_for(1000, 420), 3);
        assert_eq!(headcount_for(378, 420), 1);
        assert_eq!(headcount_for(379, 420), 2);
        assert_eq!(headcount_for(0, 420), 0);
    }

    #[test]
    fn minutes_split_by_departure_hour() {
        // Priority 1 → every 40 minutes: 13:00, 13:40 (morning), 14:20 (evening).
        let routes = vec![Route::new("R3", 30, 8.0, 1.0)];
        let window = ScheduleWindow::parse("13:00", "15:00").unwrap();
        let tt = generate_timetable(&routes, &window).unwrap();
        let est = estimate_workforce(&tt, &ShiftConfig::default(), 420).unwrap();
        assert_eq!(est.morning.drive_minutes, 60);
        assert_eq!(est.evening.drive_minutes, 30);
        assert_eq!(est.morning.headcount, 1);
        assert_eq!(est.evening.headcount, 1);
        assert_eq!(est.total_headcount(), 2);
    }

    #[test]
    fn after_midnight_departures_count_as_evening() {
        let routes = vec![Route::new("R1", 40, 12.0, 10.0)];
        let window = ScheduleWindow::parse("23:30", "00:30").unwrap();
        let tt = generate_timetable(&routes, &window).unwrap();
        let est = estimate_workforce(&tt, &ShiftConfig::default(), 420).unwrap();
        assert_eq!(est.morning.drive_minutes, 0);
        assert_eq!(est.evening.drive_minutes, 6 * 40);
    }

    #[test]
    fn zero_capacity_rejected() {
        let tt = generate_timetable(&reference_routes(), &ScheduleWindow::default()).unwrap();
        assert!(estimate_workforce(&tt, &ShiftConfig::default(), 0).is_err());
    }
}
