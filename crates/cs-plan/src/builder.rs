//! Fluent builder for constructing a [`Plan`].

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use cs_core::{CrewError, Employee, Route, RunConfig};
use cs_roster::AssignmentEngine;
use cs_timetable::{estimate_workforce, generate_timetable};

use crate::{Plan, PlanResult};

/// Fluent builder for [`Plan`].
///
/// # Required inputs
///
/// - [`RunConfig`]: service window, shifts, work-time target, seed, ...
/// - `Vec<Route>`: at least one route, unique ids
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.employees(v)`   | Synthesized from the workforce estimate          |
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanBuilder::new(config, routes)
///     .employees(employees)
///     .build()?;
/// let run = plan.run();
/// ```
pub struct PlanBuilder {
    config:    RunConfig,
    routes:    Vec<Route>,
    employees: Option<Vec<Employee>>,
}

impl PlanBuilder {
    pub fn new(config: RunConfig, routes: Vec<Route>) -> Self {
        Self { config, routes, employees: None }
    }

    /// Supply the crew roster.
    ///
    /// If not called, `E1..En` placeholders are created to match the
    /// headcount estimate of each shift.  An empty list is accepted and
    /// leaves every departure unassigned.
    pub fn employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = Some(employees);
        self
    }

    /// Validate inputs, generate the timetable, size the workforce, and
    /// return a ready-to-run [`Plan`].
    pub fn build(self) -> PlanResult<Plan> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        if let Some(employees) = &self.employees {
            check_unique_employees(employees)?;
        }

        // ── Timetable and sizing ──────────────────────────────────────────
        let timetable = generate_timetable(&self.routes, &self.config.window)?;
        let workforce = estimate_workforce(
            &timetable,
            &self.config.shifts,
            self.config.required_work_minutes,
        )?;

        let employees = match self.employees {
            Some(e) => e,
            None => {
                debug!(
                    morning = workforce.morning.headcount,
                    evening = workforce.evening.headcount,
                    "synthesizing employees from estimate"
                );
                Employee::synthesize(
                    workforce.morning.headcount as usize,
                    workforce.evening.headcount as usize,
                )
            }
        };

        info!(
            routes = self.routes.len(),
            departures = timetable.total_departures(),
            employees = employees.len(),
            "plan ready"
        );

        Ok(Plan {
            engine: AssignmentEngine::from_config(&self.config),
            config: self.config,
            routes: self.routes,
            timetable,
            workforce,
            employees,
        })
    }
}

fn check_unique_employees(employees: &[Employee]) -> PlanResult<()> {
    let mut seen = FxHashSet::default();
    for e in employees {
        if !seen.insert(&e.id) {
            return Err(CrewError::DuplicateId { what: "employee", id: e.id.to_string() }.into());
        }
    }
    Ok(())
}
