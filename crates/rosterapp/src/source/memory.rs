use super::DataSource;
use crate::error::Result;
use crate::model::Employee;

/// Records supplied directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Employee>,
}

impl MemorySource {
    pub fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }
}

impl DataSource for MemorySource {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Employee;
    use chrono::NaiveDate;

    /// Start building an employee with plausible defaults.
    pub fn employee(id: u32) -> EmployeeBuilder {
        EmployeeBuilder {
            employee: Employee {
                id,
                first_name: "Test".to_string(),
                last_name: format!("Employee{id}"),
                email: format!("employee{id}@corp.example"),
                department: "Engineering".to_string(),
                position: "Developer".to_string(),
                skills: vec!["Rust".to_string()],
                location: "Lisbon".to_string(),
                age: 30,
                salary: 60_000.0,
                performance_rating: 4.0,
                projects_completed: 5,
                manager: None,
                hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
                is_active: true,
            },
        }
    }

    pub struct EmployeeBuilder {
        employee: Employee,
    }

    impl EmployeeBuilder {
        pub fn name(mut self, first: &str, last: &str) -> Self {
            self.employee.first_name = first.to_string();
            self.employee.last_name = last.to_string();
            self
        }

        pub fn email(mut self, email: &str) -> Self {
            self.employee.email = email.to_string();
            self
        }

        pub fn department(mut self, department: &str) -> Self {
            self.employee.department = department.to_string();
            self
        }

        pub fn position(mut self, position: &str) -> Self {
            self.employee.position = position.to_string();
            self
        }

        pub fn location(mut self, location: &str) -> Self {
            self.employee.location = location.to_string();
            self
        }

        pub fn skills(mut self, skills: &[&str]) -> Self {
            self.employee.skills = skills.iter().map(|s| s.to_string()).collect();
            self
        }

        pub fn age(mut self, age: u32) -> Self {
            self.employee.age = age;
            self
        }

        pub fn salary(mut self, salary: f64) -> Self {
            self.employee.salary = salary;
            self
        }

        pub fn rating(mut self, rating: f64) -> Self {
            self.employee.performance_rating = rating;
            self
        }

        pub fn projects(mut self, projects: u32) -> Self {
            self.employee.projects_completed = projects;
            self
        }

        pub fn manager(mut self, manager: Option<&str>) -> Self {
            self.employee.manager = manager.map(str::to_string);
            self
        }

        pub fn hired(mut self, year: i32, month: u32, day: u32) -> Self {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.employee.hire_date = date;
            }
            self
        }

        pub fn active(mut self, active: bool) -> Self {
            self.employee.is_active = active;
            self
        }

        pub fn build(self) -> Employee {
            self.employee
        }
    }
}
