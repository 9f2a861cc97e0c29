//! Timetable output types.

use cs_core::{ClockTime, Interval, RouteId, ShiftConfig, ShiftKind};
use serde::Serialize;

// ── Departure ─────────────────────────────────────────────────────────────────

/// One scheduled vehicle departure, as handed to the assignment engine.
///
/// Identity is `(route, start)`; the generator never emits two departures
/// for the same route at the same instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Departure {
    pub route:    RouteId,
    pub start:    ClockTime,
    /// `start + route duration`.
    pub end:      ClockTime,
    /// The route's normalized priority, used by priority-first sorting.
    pub priority: f64,
}

impl Departure {
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since(self.start)
    }
}

// ── RouteTimetable ────────────────────────────────────────────────────────────

/// The departure times generated for one route, strictly increasing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteTimetable {
    #[serde(rename = "routeId")]
    pub route:            RouteId,
    #[serde(skip)]
    pub duration_minutes: u32,
    #[serde(skip)]
    pub priority:         f64,
    pub departures:       Vec<ClockTime>,
}

impl RouteTimetable {
    /// Expand the departure times into full [`Departure`]s.
    pub fn expand(&self) -> impl Iterator<Item = Departure> + '_ {
        self.departures.iter().map(move |&start| Departure {
            route:    self.route.clone(),
            start,
            end:      start.add_minutes(self.duration_minutes),
            priority: self.priority,
        })
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

/// Generated departures for every route, in route input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timetable {
    routes: Vec<RouteTimetable>,
}

impl Timetable {
    pub(crate) fn new(routes: Vec<RouteTimetable>) -> Self {
        Self { routes }
    }

    /// Per-route timetables in route input order.
    pub fn routes(&self) -> &[RouteTimetable] {
        &self.routes
    }

    /// Departure times of `route`, or `None` for an unknown route.
    pub fn get(&self, route: &RouteId) -> Option<&[ClockTime]> {
        self.routes
            .iter()
            .find(|rt| &rt.route == route)
            .map(|rt| rt.departures.as_slice())
    }

    pub fn total_departures(&self) -> usize {
        self.routes.iter().map(|rt| rt.departures.len()).sum()
    }

    /// All departures flattened: routes in input order, each route's
    /// departures in time order.
    pub fn departures(&self) -> Vec<Departure> {
        self.routes.iter().flat_map(RouteTimetable::expand).collect()
    }

    /// Departures whose start falls in the given shift's bucket.
    pub fn departures_in(&self, shifts: &ShiftConfig, kind: ShiftKind) -> Vec<Departure> {
        self.routes
            .iter()
            .flat_map(RouteTimetable::expand)
            .filter(|d| shifts.kind_for(d.start) == kind)
            .collect()
    }
}
