//! The assignment engine.

use tracing::{debug, info, warn};

use cs_core::{Employee, JitterSource, RunConfig, ShiftConfig, ShiftKind};
use cs_timetable::Departure;

use crate::observer::{AttemptObserver, NoopObserver};
use crate::state::CrewState;
use crate::strategy::route_counts;
use crate::{Coverage, EmployeeSchedule, Roster, ShiftCoverage, Strategy};

/// Packs departures onto shift-bound employees.
///
/// The engine itself holds only configuration, so one instance can serve
/// any number of independent runs.
#[derive(Clone, Debug)]
pub struct AssignmentEngine {
    shifts:       ShiftConfig,
    max_attempts: u8,
}

impl AssignmentEngine {
    /// `max_attempts` is clamped to `1..=3`, one strategy per attempt.
    pub fn new(shifts: ShiftConfig, max_attempts: u8) -> Self {
        Self {
            shifts,
            max_attempts: max_attempts.clamp(1, Strategy::ALL.len() as u8),
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.shifts, config.attempts())
    }

    /// Run the attempt loop without progress callbacks.
    pub fn assign<J: JitterSource>(
        &self,
        departures: &[Departure],
        employees: &[Employee],
        jitter: &mut J,
    ) -> Roster {
        self.assign_observed(departures, employees, jitter, &mut NoopObserver)
    }

    /// Try strategies in order until one covers every departure.
    ///
    /// If none does, the last attempt's roster is returned.
    pub fn assign_observed<J: JitterSource, O: AttemptObserver>(
        &self,
        departures: &[Departure],
        employees: &[Employee],
        jitter: &mut J,
        observer: &mut O,
    ) -> Roster {
        let mut last: Option<Roster> = None;

        for (i, &strategy) in Strategy::ALL.iter().take(self.max_attempts as usize).enumerate() {
            let attempt = i as u8 + 1;
            let roster = self.run_attempt(attempt, strategy, departures, employees, jitter, observer);
            observer.on_attempt_end(attempt, strategy, &roster.coverage);

            if roster.coverage.is_full() {
                info!(attempt, %strategy, "full assignment achieved");
                return roster;
            }
            last = Some(roster);
        }

        match last {
            Some(roster) => {
                let combined = roster.coverage.combined();
                warn!(
                    attempts = roster.attempts,
                    assigned = combined.assigned,
                    total = combined.total,
                    strategy = %roster.strategy,
                    "could not achieve full assignment"
                );
                roster
            }
            // max_attempts >= 1, so the loop always produces a roster.
            None => self.run_attempt(1, Strategy::TimeOrder, departures, employees, jitter, observer),
        }
    }

    /// Run a single attempt with the given strategy.
    pub fn attempt<J: JitterSource>(
        &self,
        strategy: Strategy,
        departures: &[Departure],
        employees: &[Employee],
        jitter: &mut J,
    ) -> Roster {
        self.run_attempt(1, strategy, departures, employees, jitter, &mut NoopObserver)
    }

    fn run_attempt<J: JitterSource, O: AttemptObserver>(
        &self,
        attempt: u8,
        strategy: Strategy,
        departures: &[Departure],
        employees: &[Employee],
        jitter: &mut J,
        observer: &mut O,
    ) -> Roster {
        let counts = route_counts(departures);
        let mut ordered: Vec<&Departure> = departures.iter().collect();
        strategy.sort(&mut ordered, &counts);

        let mut crew: Vec<CrewState> = employees
            .iter()
            .map(|e| CrewState::new(self.shifts.range(e.shift).start_instant()))
            .collect();

        let mut coverage = ShiftCoverage::default();
        let mut unassigned = Vec::new();

        for kind in ShiftKind::ALL {
            let bucket: Vec<&Departure> = ordered
                .iter()
                .copied()
                .filter(|d| self.shifts.kind_for(d.start) == kind)
                .collect();
            let members: Vec<usize> = employees
                .iter()
                .enumerate()
                .filter(|(_, e)| e.shift == kind)
                .map(|(i, _)| i)
                .collect();

            let mut shift = ShiftRun { strategy, members: &members, crew: &mut crew };
            let leftovers = shift.first_pass(&bucket, jitter);
            if !leftovers.is_empty() {
                debug!(attempt, shift = %kind, leftovers = leftovers.len(), "second pass");
                observer.on_second_pass(attempt, kind, leftovers.len());
            }
            let missed = shift.second_pass(leftovers);

            coverage.set(kind, Coverage { assigned: bucket.len() - missed.len(), total: bucket.len() });
            unassigned.extend(missed.into_iter().cloned());
        }

        let schedules = employees
            .iter()
            .zip(crew)
            .map(|(e, state)| EmployeeSchedule {
                employee_id:        e.id.clone(),
                name:               e.name.clone(),
                shift:              e.shift,
                total_work_minutes: state.total_work_minutes,
                assignments:        state.into_assignments(),
            })
            .collect();

        Roster { schedules, coverage, unassigned, strategy, attempts: attempt }
    }
}

// ── Per-shift passes ──────────────────────────────────────────────────────────

/// One shift's slice of an attempt: its members and the shared crew state.
struct ShiftRun<'a> {
    strategy: Strategy,
    members:  &'a [usize],
    crew:     &'a mut [CrewState],
}

impl ShiftRun<'_> {
    /// Cost-driven pass.  Returns the departures nobody could take.
    fn first_pass<'d, J: JitterSource>(
        &mut self,
        bucket: &[&'d Departure],
        jitter: &mut J,
    ) -> Vec<&'d Departure> {
        let weights = self.strategy.weights();
        let mut leftovers = Vec::new();

        for &departure in bucket {
            let interval = departure.interval();
            let mut best: Option<(usize, f64)> = None;

            for &m in self.members {
                let state = &self.crew[m];
                if state.available_after > departure.start || state.conflicts(interval) {
                    continue;
                }
                let cost = state.cost(&departure.route, weights) + jitter.jitter();
                if best.is_none_or(|(_, c)| cost < c) {
                    best = Some((m, cost));
                }
            }

            match best {
                Some((m, _)) => self.crew[m].record(departure),
                None => leftovers.push(departure),
            }
        }
        leftovers
    }

    /// Coverage-first pass: each leftover, in time order, goes to the
    /// least-loaded member without an overlap.  Availability is ignored so
    /// gaps left behind by the first pass can be filled.
    fn second_pass<'d>(&mut self, mut leftovers: Vec<&'d Departure>) -> Vec<&'d Departure> {
        leftovers.sort_by_key(|d| d.start);
        let mut missed = Vec::new();

        for departure in leftovers {
            let interval = departure.interval();
            let mut by_load = self.members.to_vec();
            by_load.sort_by_key(|&m| self.crew[m].total_work_minutes);

            match by_load.into_iter().find(|&m| !self.crew[m].conflicts(interval)) {
                Some(m) => self.crew[m].record(departure),
                None => missed.push(departure),
            }
        }
        missed
    }
}
