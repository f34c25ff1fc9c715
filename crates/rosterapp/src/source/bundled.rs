use super::{parse_roster, DataSource};
use crate::error::Result;
use crate::model::Employee;

const BUNDLED_ROSTER: &str = include_str!("../../data/employees.json");

/// The roster shipped with the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl DataSource for BundledSource {
    fn load(&self) -> Result<Vec<Employee>> {
        parse_roster(BUNDLED_ROSTER)
    }

    fn describe(&self) -> String {
        "bundled roster".to_string()
    }
}
