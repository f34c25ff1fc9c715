use std::path::PathBuf;

use super::{parse_roster, DataSource};
use crate::error::Result;
use crate::model::Employee;

/// A roster read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Employee>> {
        let json = std::fs::read_to_string(&self.path)?;
        let records = parse_roster(&json)?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "read roster file");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::source::memory::fixtures::employee;

    #[test]
    fn reads_roster_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let records = vec![employee(1).build(), employee(2).active(false).build()];
        let json = serde_json::json!({ "employees": records });
        std::fs::write(&path, json.to_string()).unwrap();

        let loaded = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.load(), Err(RosterError::Io(_))));
    }
}
