//! JSON and CSV loaders for route and employee listings.
//!
//! # CSV format
//!
//! One row per record; header names follow the keys accepted by
//! [`crate::record`].
//!
//! ```csv
//! id,name,estimated_time,length,avg_priority
//! R1,Harbour Loop,40,12,10
//! R2,,40,18,5
//! ```
//!
//! ```csv
//! id,name,shift
//! E1,Ana,morning
//! E2,Bo,evening
//! ```
//!
//! # JSON format
//!
//! A top-level array of objects with the same keys.
//!
//! All loaders accept any `Read` source; pass a `std::fs::File` for files or
//! a `std::io::Cursor` in tests.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::record::{EmployeeRecord, RouteRecord, employees_from_records, routes_from_records};
use crate::{CrewResult, Employee, Route};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and normalize routes from a JSON array.
pub fn load_routes_json<R: Read>(reader: R) -> CrewResult<Vec<Route>> {
    let records: Vec<RouteRecord> = serde_json::from_reader(reader)?;
    routes_from_records(records)
}

/// Load and normalize employees from a JSON array.
pub fn load_employees_json<R: Read>(reader: R) -> CrewResult<Vec<Employee>> {
    let records: Vec<EmployeeRecord> = serde_json::from_reader(reader)?;
    employees_from_records(records)
}

/// Load and normalize routes from CSV with a header row.
pub fn load_routes_csv<R: Read>(reader: R) -> CrewResult<Vec<Route>> {
    routes_from_records(read_csv_records(reader)?)
}

/// Load and normalize employees from CSV with a header row.
pub fn load_employees_csv<R: Read>(reader: R) -> CrewResult<Vec<Employee>> {
    employees_from_records(read_csv_records(reader)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_csv_records<R: Read, T: DeserializeOwned>(reader: R) -> CrewResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        records.push(result?);
    }
    Ok(records)
}
