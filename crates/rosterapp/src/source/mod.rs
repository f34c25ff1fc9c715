//! # Data Sources
//!
//! The roster is supplied by a [`DataSource`]: something that can produce the ordered record
//! sequence once, at startup. Where the records come from is the source's business; the rest
//! of the library only ever sees `Vec<Employee>`.
//!
//! ## Implementations
//!
//! - [`bundled::BundledSource`]: the roster compiled into the library (default).
//! - [`file::JsonFileSource`]: a JSON file on disk.
//! - [`memory::MemorySource`]: records handed over directly, for tests and embedding.
//!
//! ## Accepted JSON Shapes
//!
//! Both an envelope and a bare array are accepted:
//!
//! ```text
//! { "employees": [ { ... }, { ... } ] }
//! [ { ... }, { ... } ]
//! ```

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::Result;
use crate::model::Employee;

pub mod bundled;
pub mod file;
pub mod memory;

pub trait DataSource {
    /// Produce the full roster, in display order.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Short human-readable description of where records come from.
    fn describe(&self) -> String;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    Envelope { employees: Vec<Employee> },
    Bare(Vec<Employee>),
}

/// Parse a roster document in either accepted shape.
pub fn parse_roster(json: &str) -> Result<Vec<Employee>> {
    let records = match serde_json::from_str::<RosterDocument>(json) {
        Ok(RosterDocument::Envelope { employees }) => employees,
        Ok(RosterDocument::Bare(employees)) => employees,
        // Untagged errors are opaque; re-parse as the shape the input looks like for a useful
        // message.
        Err(_) if json.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<Employee>>(json)?
        }
        Err(_) => {
            #[derive(Deserialize)]
            struct Envelope {
                employees: Vec<Employee>,
            }
            serde_json::from_str::<Envelope>(json)?.employees
        }
    };

    let mut seen = HashSet::new();
    for employee in &records {
        if !seen.insert(employee.id) {
            tracing::warn!(id = employee.id, "duplicate employee id in roster");
        }
    }
    Ok(records)
}
