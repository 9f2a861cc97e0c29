//! Frequency-driven timetable generator.
//!
//! The generator walks a cursor across the service window.  The cursor step
//! is 10 minutes, shrinking to half the band's headway while the first
//! matching peak band is open.  At each cursor position every route whose
//! next-due time has arrived gets a departure, and its next-due time moves
//! forward by its frequency (shortened to 70 % inside a peak band, never
//! below 10 minutes).
//!
//! Because next-due times only move forward by at least
//! [`MIN_HEADWAY_MINUTES`], departures of one route are strictly increasing
//! and spaced at least that far apart.

use rustc_hash::FxHashSet;
use tracing::debug;

use cs_core::{ClockTime, Route, ScheduleWindow};

use crate::{RouteTimetable, Timetable, TimetableError, TimetableResult};

/// Cursor step outside peak bands.
pub const DEFAULT_TICK_MINUTES: u32 = 10;

/// Floor applied to every route's effective headway.
pub const MIN_HEADWAY_MINUTES: u32 = 10;

/// Headway multiplier inside a peak band, in percent.
pub const PEAK_FACTOR_PERCENT: u32 = 70;

/// Generate the day's departures for every route.
///
/// # Errors
///
/// Fails before doing any work if `routes` is empty, contains a duplicate
/// id or a zero-length route, or if `window` does not validate.
pub fn generate_timetable(routes: &[Route], window: &ScheduleWindow) -> TimetableResult<Timetable> {
    validate_routes(routes)?;
    window.validate()?;

    let start = window.start;
    let end = window.end_instant();

    let mut next_due: Vec<ClockTime> = vec![start; routes.len()];
    let mut schedules: Vec<Vec<ClockTime>> = vec![Vec::new(); routes.len()];

    let mut t = start;
    while t < end {
        let band = window.peak_band_at(t);
        let step = band.map_or(DEFAULT_TICK_MINUTES, |b| b.tick_minutes());

        for (i, route) in routes.iter().enumerate() {
            if next_due[i] <= t {
                schedules[i].push(t);
                next_due[i] = t.add_minutes(effective_headway(route.frequency(), band.is_some()));
            }
        }

        t = t.add_minutes(step);
    }

    let timetable = Timetable::new(
        routes
            .iter()
            .zip(schedules)
            .map(|(route, departures)| RouteTimetable {
                route:            route.id.clone(),
                duration_minutes: route.duration_minutes,
                priority:         route.priority,
                departures,
            })
            .collect(),
    );

    debug!(
        routes = routes.len(),
        departures = timetable.total_departures(),
        start = %start,
        end = %window.end,
        "generated timetable"
    );
    Ok(timetable)
}

/// Minutes until a route is due again after a departure.
#[inline]
pub fn effective_headway(frequency: u32, in_peak: bool) -> u32 {
    let scaled = if in_peak {
        frequency * PEAK_FACTOR_PERCENT / 100
    } else {
        frequency
    };
    scaled.max(MIN_HEADWAY_MINUTES)
}

fn validate_routes(routes: &[Route]) -> TimetableResult<()> {
    if routes.is_empty() {
        return Err(TimetableError::NoRoutes);
    }
    let mut seen = FxHashSet::default();
    for route in routes {
        if route.duration_minutes == 0 {
            return Err(TimetableError::ZeroDuration(route.id.to_string()));
        }
        if !seen.insert(&route.id) {
            return Err(TimetableError::DuplicateRoute(route.id.to_string()));
        }
    }
    Ok(())
}
