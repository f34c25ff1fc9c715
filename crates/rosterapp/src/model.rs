//! # Domain Model: Employee Records
//!
//! The roster is an ordered sequence of [`Employee`] records. Records are loaded once by a
//! [`crate::source::DataSource`] and never mutated afterwards: every filter, search and view
//! operation borrows them.
//!
//! ## Wire Shape
//!
//! Records are deserialized from camelCase JSON, the shape the bundled roster ships in:
//!
//! ```text
//! {
//!   "id": 1, "firstName": "Ada", "lastName": "Moss", "email": "ada.moss@corp.example",
//!   "department": "Engineering", "position": "Developer", "skills": ["Rust", "SQL"],
//!   "location": "Lisbon", "age": 34, "salary": 98000, "performanceRating": 4.6,
//!   "projectsCompleted": 12, "manager": "Iris Kane", "hireDate": "2019-03-11",
//!   "isActive": true
//! }
//! ```
//!
//! ## Missing Attributes
//!
//! `skills` and `manager` may be absent. An absent skill list deserializes as empty, which
//! matches no skill filter; an absent manager is `None`. Neither is an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label shown for, and used to filter, active employees.
pub const ACTIVE_LABEL: &str = "Active";
/// Label shown for, and used to filter, inactive employees.
pub const INACTIVE_LABEL: &str = "Inactive";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: String,
    pub age: u32,
    pub salary: f64,
    pub performance_rating: f64,
    pub projects_completed: u32,
    #[serde(default)]
    pub manager: Option<String>,
    pub hire_date: NaiveDate,
    pub is_active: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The `Active` / `Inactive` label for this record.
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            ACTIVE_LABEL
        } else {
            INACTIVE_LABEL
        }
    }
}

/// Headline counts over the full roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl RosterStats {
    pub fn from_records(records: &[Employee]) -> Self {
        let active = records.iter().filter(|e| e.is_active).count();
        Self {
            total: records.len(),
            active,
            inactive: records.len() - active,
        }
    }
}
