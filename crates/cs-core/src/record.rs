//! Loosely typed input records and their normalization.
//!
//! The listing collaborator hands over whatever its storage produced:
//! camelCase or snake_case keys, ids as strings or integers, priorities as
//! numbers, numeric strings or `null`.  These records absorb all of that and
//! convert into the strict [`Route`] / [`Employee`] types the engine uses.
//!
//! # Accepted keys
//!
//! | Field       | Keys                                                                  |
//! |-------------|-----------------------------------------------------------------------|
//! | route id    | `id`, `routeId`, `route_id`                                           |
//! | duration    | `estimatedDurationMinutes`, `estimated_duration_minutes`, `estimatedTime`, `estimated_time`, `duration` |
//! | length      | `lengthKm`, `length_km`, `length`                                     |
//! | priority    | `avgPriority`, `avg_priority`, `priority`                             |
//! | employee id | `id`, `empId`, `emp_id`                                               |
//!
//! Unknown keys (`stop_ids`, `stopIds`, geometry, …) are ignored.

use rustc_hash::FxHashSet;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::model::DEFAULT_PRIORITY;
use crate::{CrewError, CrewResult, Employee, Route, ShiftKind};

// ── Lenient field decoding ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(d)? {
        RawId::Int(n) => n.to_string(),
        RawId::Text(s) => s.trim().to_owned(),
    })
}

/// Numbers, numeric strings → `Some`; `null`, blanks, garbage → `None`.
fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let raw: Option<RawNumber> = Option::deserialize(d)?;
    Ok(raw.and_then(|r| match r {
        RawNumber::Num(n) => Some(n),
        RawNumber::Text(s) => s.trim().parse().ok(),
        RawNumber::Other(_) => None,
    }))
}

fn blank_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(d)?;
    Ok(raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()))
}

// ── RouteRecord ───────────────────────────────────────────────────────────────

/// A route as listed by the storage collaborator.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RouteRecord {
    #[serde(alias = "routeId", alias = "route_id", deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,

    #[serde(
        default,
        alias = "estimatedDurationMinutes",
        alias = "estimatedTime",
        alias = "estimated_time",
        alias = "duration",
        deserialize_with = "lenient_number"
    )]
    pub estimated_duration_minutes: Option<f64>,

    #[serde(
        default,
        alias = "lengthKm",
        alias = "length",
        deserialize_with = "lenient_number"
    )]
    pub length_km: Option<f64>,

    #[serde(
        default,
        alias = "avgPriority",
        alias = "priority",
        deserialize_with = "lenient_number"
    )]
    pub avg_priority: Option<f64>,
}

impl RouteRecord {
    /// Normalize into a [`Route`].
    ///
    /// Fractional durations round up so a driver is never booked short.
    /// A missing priority becomes [`DEFAULT_PRIORITY`].
    pub fn into_route(self) -> CrewResult<Route> {
        if self.id.is_empty() {
            return Err(CrewError::Parse("route record has an empty id".into()));
        }
        let duration = match self.estimated_duration_minutes {
            Some(d) if d.is_finite() && d > 0.0 => d.ceil() as u32,
            Some(d) => {
                return Err(CrewError::Config(format!(
                    "route {:?} has non-positive duration {d}",
                    self.id
                )));
            }
            None => {
                return Err(CrewError::Parse(format!(
                    "route {:?} is missing its estimated duration",
                    self.id
                )));
            }
        };
        let priority = self.avg_priority.unwrap_or(DEFAULT_PRIORITY);
        let route = Route::new(self.id, duration, self.length_km.unwrap_or(0.0), priority);
        Ok(match self.name {
            Some(name) => route.with_name(name),
            None => route,
        })
    }
}

// ── EmployeeRecord ────────────────────────────────────────────────────────────

/// An employee as listed by the storage collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeRecord {
    #[serde(alias = "empId", alias = "emp_id", deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,

    pub shift: String,
}

impl EmployeeRecord {
    /// Normalize into an [`Employee`].  A missing name falls back to the id.
    pub fn into_employee(self) -> CrewResult<Employee> {
        if self.id.is_empty() {
            return Err(CrewError::Parse("employee record has an empty id".into()));
        }
        let shift: ShiftKind = self.shift.parse()?;
        let name = self.name.unwrap_or_else(|| self.id.clone());
        Ok(Employee::new(self.id, name, shift))
    }
}

// ── Batch normalization ───────────────────────────────────────────────────────

/// Normalize a batch of route records, rejecting duplicate ids.
pub fn routes_from_records(records: Vec<RouteRecord>) -> CrewResult<Vec<Route>> {
    let mut seen = FxHashSet::default();
    records
        .into_iter()
        .map(|r| {
            let route = r.into_route()?;
            if !seen.insert(route.id.clone()) {
                return Err(CrewError::DuplicateId { what: "route", id: route.id.0 });
            }
            Ok(route)
        })
        .collect()
}

/// Normalize a batch of employee records, rejecting duplicate ids.
pub fn employees_from_records(records: Vec<EmployeeRecord>) -> CrewResult<Vec<Employee>> {
    let mut seen = FxHashSet::default();
    records
        .into_iter()
        .map(|r| {
            let employee = r.into_employee()?;
            if !seen.insert(employee.id.clone()) {
                return Err(CrewError::DuplicateId { what: "employee", id: employee.id.0 });
            }
            Ok(employee)
        })
        .collect()
}
