//! Column metadata and cell rendering.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::model::Employee;

/// Minimum width assumed for a column that declares none.
pub const DEFAULT_MIN_WIDTH: u32 = 120;

/// Marker appended to a truncated skill preview.
pub const MORE_MARKER: &str = "…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Id,
    Name,
    Email,
    Department,
    Position,
    Skills,
    SkillsSummary,
    Location,
    Age,
    Salary,
    Performance,
    Projects,
    Manager,
    HireDate,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Display metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub header: &'static str,
    /// Minimum width in pixels
    pub min_width: Option<u32>,
    /// Share of any width left over once every column has its minimum
    pub flex: Option<u32>,
    pub align: Align,
    pub sortable: bool,
    /// Shown in grid mode
    pub grid: bool,
    /// Shown in compact mode
    pub compact: bool,
}

impl ColumnSpec {
    const fn new(key: ColumnKey, header: &'static str) -> Self {
        Self {
            key,
            header,
            min_width: None,
            flex: None,
            align: Align::Left,
            sortable: true,
            grid: true,
            compact: true,
        }
    }

    const fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    const fn flex(mut self, weight: u32) -> Self {
        self.flex = Some(weight);
        self
    }

    const fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    const fn grid_only(mut self) -> Self {
        self.compact = false;
        self
    }

    const fn compact_only(mut self) -> Self {
        self.grid = false;
        self
    }

    /// The minimum width used for layout sums.
    pub fn effective_min_width(&self) -> u32 {
        self.min_width.unwrap_or(DEFAULT_MIN_WIDTH)
    }
}

/// Every column, in display order.
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new(ColumnKey::Id, "ID").min_width(70).right(),
    ColumnSpec::new(ColumnKey::Name, "Name").min_width(160).flex(2),
    ColumnSpec::new(ColumnKey::Email, "Email").min_width(250).flex(3),
    ColumnSpec::new(ColumnKey::Department, "Department").min_width(150).flex(1),
    ColumnSpec::new(ColumnKey::Position, "Position").min_width(170).flex(1),
    ColumnSpec::new(ColumnKey::Skills, "Skills")
        .min_width(240)
        .flex(3)
        .unsortable()
        .grid_only(),
    ColumnSpec::new(ColumnKey::SkillsSummary, "Skills")
        .min_width(200)
        .unsortable()
        .compact_only(),
    ColumnSpec::new(ColumnKey::Location, "Location").min_width(140).flex(1),
    ColumnSpec::new(ColumnKey::Age, "Age").min_width(80).right(),
    ColumnSpec::new(ColumnKey::Salary, "Salary").min_width(130).right(),
    ColumnSpec::new(ColumnKey::Performance, "Performance")
        .min_width(120)
        .right(),
    ColumnSpec::new(ColumnKey::Projects, "Projects").min_width(115).right(),
    ColumnSpec::new(ColumnKey::Manager, "Manager").min_width(150).flex(1),
    ColumnSpec::new(ColumnKey::HireDate, "Hire Date").min_width(130),
    ColumnSpec::new(ColumnKey::Active, "Active").min_width(100),
];

/// Knobs for cell rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOptions {
    /// Skills listed in a compact preview before the [`MORE_MARKER`]
    pub skills_preview: usize,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self { skills_preview: 2 }
    }
}

impl ColumnKey {
    pub fn spec(self) -> &'static ColumnSpec {
        // COLUMNS lists one entry per variant, in declaration order.
        &COLUMNS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
            Self::Skills => "skills",
            Self::SkillsSummary => "skillsSummary",
            Self::Location => "location",
            Self::Age => "age",
            Self::Salary => "salary",
            Self::Performance => "performance",
            Self::Projects => "projects",
            Self::Manager => "manager",
            Self::HireDate => "hireDate",
            Self::Active => "active",
        }
    }

    /// Cell text for `employee` in this column.
    pub fn render(self, employee: &Employee, options: &CellOptions) -> String {
        match self {
            Self::Id => employee.id.to_string(),
            Self::Name => employee.full_name(),
            Self::Email => employee.email.clone(),
            Self::Department => employee.department.clone(),
            Self::Position => employee.position.clone(),
            Self::Skills => employee.skills.join(", "),
            Self::SkillsSummary => skills_preview(&employee.skills, options.skills_preview),
            Self::Location => employee.location.clone(),
            Self::Age => employee.age.to_string(),
            Self::Salary => format_salary(employee.salary),
            Self::Performance => employee.performance_rating.to_string(),
            Self::Projects => employee.projects_completed.to_string(),
            Self::Manager => employee.manager.clone().unwrap_or_else(|| "-".to_string()),
            Self::HireDate => employee.hire_date.format("%Y-%m-%d").to_string(),
            Self::Active => employee.status_label().to_string(),
        }
    }

    /// Ascending order of two records by this column's underlying value.
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a
                .first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name)),
            Self::Email => a.email.cmp(&b.email),
            Self::Department => a.department.cmp(&b.department),
            Self::Position => a.position.cmp(&b.position),
            Self::Skills | Self::SkillsSummary => a.skills.cmp(&b.skills),
            Self::Location => a.location.cmp(&b.location),
            Self::Age => a.age.cmp(&b.age),
            Self::Salary => a.salary.total_cmp(&b.salary),
            Self::Performance => a.performance_rating.total_cmp(&b.performance_rating),
            Self::Projects => a.projects_completed.cmp(&b.projects_completed),
            Self::Manager => a.manager.cmp(&b.manager),
            Self::HireDate => a.hire_date.cmp(&b.hire_date),
            Self::Active => a.is_active.cmp(&b.is_active),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        COLUMNS
            .iter()
            .map(|spec| spec.key)
            .find(|key| key.name().to_lowercase() == wanted)
            .ok_or_else(|| RosterError::Api(format!("Unknown column: {}", s.trim())))
    }
}

/// `$NK`, thousands rounded to whole numbers with halves rounded up.
fn format_salary(salary: f64) -> String {
    format!("${}K", (salary / 1000.0).round())
}

fn skills_preview(skills: &[String], limit: usize) -> String {
    if skills.len() <= limit {
        return skills.join(", ");
    }
    let shown = skills[..limit].join(", ");
    if shown.is_empty() {
        MORE_MARKER.to_string()
    } else {
        format!("{shown}, {MORE_MARKER}")
    }
}
