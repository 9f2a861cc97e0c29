//! Per-employee working state for one assignment attempt.

use rustc_hash::FxHashMap;

use cs_core::{ClockTime, Interval, RouteId};
use cs_timetable::Departure;

use crate::{Assignment, CostWeights};

/// Running totals for one employee within one attempt.
///
/// Built fresh for every attempt; never outlives the engine call.
#[derive(Clone, Debug)]
pub struct CrewState {
    pub total_work_minutes: u32,
    /// No first-pass departure may start before this instant.
    pub available_after:    ClockTime,
    route_visits:           FxHashMap<RouteId, u32>,
    assignments:            Vec<Assignment>,
}

impl CrewState {
    /// State at the start of an attempt: idle until `shift_start`.
    pub fn new(shift_start: ClockTime) -> Self {
        Self {
            total_work_minutes: 0,
            available_after:    shift_start,
            route_visits:       FxHashMap::default(),
            assignments:        Vec::new(),
        }
    }

    /// Times this employee has already driven `route` in this attempt.
    #[inline]
    pub fn visits(&self, route: &RouteId) -> u32 {
        self.route_visits.get(route).copied().unwrap_or(0)
    }

    /// `true` if `interval` overlaps any assignment already held.
    pub fn conflicts(&self, interval: Interval) -> bool {
        self.assignments.iter().any(|a| a.interval().overlaps(interval))
    }

    /// Deterministic part of the first-pass cost.
    #[inline]
    pub fn cost(&self, route: &RouteId, weights: CostWeights) -> f64 {
        weights.work_time * (self.total_work_minutes as f64 / 10.0)
            + weights.variety * 20.0 * self.visits(route) as f64
    }

    /// Take `departure`: update workload, visits and availability.
    pub fn record(&mut self, departure: &Departure) {
        debug_assert!(!self.conflicts(departure.interval()));
        self.total_work_minutes += departure.duration_minutes();
        *self.route_visits.entry(departure.route.clone()).or_default() += 1;
        self.available_after = self.available_after.max(departure.end);
        self.assignments.push(Assignment {
            route_id:   departure.route.clone(),
            start_time: departure.start,
            end_time:   departure.end,
        });
    }

    /// Consume the state, returning assignments sorted by start time.
    pub fn into_assignments(mut self) -> Vec<Assignment> {
        self.assignments.sort_by_key(|a| a.start_time);
        self.assignments
    }
}
