//! A validated, ready-to-run plan.

use cs_core::{Employee, JitterSource, Route, RunConfig, SeededJitter};
use cs_roster::{AssignmentEngine, AttemptObserver, NoopObserver};
use cs_timetable::{Timetable, WorkforceEstimate};

use crate::ScheduleRun;

/// Everything computed before assignment: the timetable, the headcount
/// estimate and the crew.
///
/// Inputs are never mutated by [`Plan::run`], so a plan can be run any
/// number of times; each call returns a fresh [`ScheduleRun`].
///
/// Create via [`PlanBuilder`][crate::PlanBuilder].
#[derive(Clone, Debug)]
pub struct Plan {
    pub config:    RunConfig,
    pub routes:    Vec<Route>,
    pub timetable: Timetable,
    pub workforce: WorkforceEstimate,
    pub employees: Vec<Employee>,
    pub(crate) engine: AssignmentEngine,
}

impl Plan {
    /// Assign the crew using jitter seeded from `config.seed`.
    pub fn run(&self) -> ScheduleRun {
        self.run_with(&mut SeededJitter::new(self.config.seed), &mut NoopObserver)
    }

    /// Assign the crew with an injected jitter source and observer.
    pub fn run_with<J: JitterSource, O: AttemptObserver>(
        &self,
        jitter: &mut J,
        observer: &mut O,
    ) -> ScheduleRun {
        let departures = self.timetable.departures();
        let roster = self.engine.assign_observed(&departures, &self.employees, jitter, observer);
        ScheduleRun::new(self.timetable.clone(), self.workforce, roster)
    }
}
