//! Route and employee domain types, and the priority → frequency model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CrewError, EmployeeId, RouteId};

/// Priority assumed when a record carries none (or garbage).
pub const DEFAULT_PRIORITY: f64 = 5.0;

pub const MIN_PRIORITY: f64 = 1.0;
pub const MAX_PRIORITY: f64 = 10.0;

/// Headway of a priority-10 route.
pub const MIN_FREQUENCY_MINUTES: u32 = 10;
/// Headway of a priority-1 route.
pub const MAX_FREQUENCY_MINUTES: u32 = 40;

// ── Frequency model ───────────────────────────────────────────────────────────

/// Clamp a raw priority into `[1, 10]`, substituting [`DEFAULT_PRIORITY`]
/// for non-finite input.
#[inline]
pub fn normalize_priority(priority: f64) -> f64 {
    let p = if priority.is_finite() { priority } else { DEFAULT_PRIORITY };
    p.clamp(MIN_PRIORITY, MAX_PRIORITY)
}

/// Minutes between departures for a route of the given priority.
///
/// Linear map, floored: priority 1 → 40 min, priority 10 → 10 min.
pub fn frequency_minutes(priority: f64) -> u32 {
    let p = normalize_priority(priority);
    let span = (MAX_FREQUENCY_MINUTES - MIN_FREQUENCY_MINUTES) as f64;
    let f = (MAX_FREQUENCY_MINUTES as f64 - (p - MIN_PRIORITY) / (MAX_PRIORITY - MIN_PRIORITY) * span)
        .floor() as u32;
    f.clamp(MIN_FREQUENCY_MINUTES, MAX_FREQUENCY_MINUTES)
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A bus route as the scheduler sees it.
///
/// `frequency` is derived once from `priority` at construction and kept
/// private so the `10..=40` invariant cannot be broken afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    pub id:               RouteId,
    pub name:             Option<String>,
    /// Estimated one-way drive time in minutes.
    pub duration_minutes: u32,
    pub length_km:        f64,
    /// Normalized average stop priority in `[1, 10]`.
    pub priority:         f64,
    frequency:            u32,
}

impl Route {
    pub fn new(id: impl Into<RouteId>, duration_minutes: u32, length_km: f64, priority: f64) -> Self {
        let priority = normalize_priority(priority);
        Self {
            id: id.into(),
            name: None,
            duration_minutes,
            length_km,
            priority,
            frequency: frequency_minutes(priority),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Minutes between departures outside peak bands.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Display label: the name if present, else the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

// ── Shifts ────────────────────────────────────────────────────────────────────

/// The two shifts an employee can be bound to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Morning,
    Evening,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 2] = [ShiftKind::Morning, ShiftKind::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Evening => "evening",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = CrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftKind::Morning),
            "evening" => Ok(ShiftKind::Evening),
            other => Err(CrewError::Parse(format!(
                "invalid shift {other:?}: expected \"morning\" or \"evening\""
            ))),
        }
    }
}

// ── Employee ──────────────────────────────────────────────────────────────────

/// A crew member bound to one shift.  Read-only to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id:    EmployeeId,
    pub name:  String,
    pub shift: ShiftKind,
}

impl Employee {
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>, shift: ShiftKind) -> Self {
        Self { id: id.into(), name: name.into(), shift }
    }

    /// Build a placeholder roster of `morning + evening` employees named
    /// `E1 / Employee 1` onwards, morning shift first.
    ///
    /// Used to staff a run straight from a headcount estimate.
    pub fn synthesize(morning: usize, evening: usize) -> Vec<Employee> {
        (0..morning + evening)
            .map(|i| {
                let n = i + 1;
                let shift = if i < morning { ShiftKind::Morning } else { ShiftKind::Evening };
                Employee::new(format!("E{n}"), format!("Employee {n}"), shift)
            })
            .collect()
    }
}
