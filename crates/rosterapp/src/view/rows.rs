//! Row ordering and paging for the grid.

use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::ColumnKey;
use crate::error::RosterError;
use crate::model::Employee;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort rows by one column.
///
/// Parsed from `column` or `column:asc|desc`, e.g. `salary:desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: ColumnKey, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

impl FromStr for SortSpec {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.rsplit_once(':') {
            Some((column, dir)) => {
                let direction = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortDirection::Asc,
                    "desc" => SortDirection::Desc,
                    other => {
                        return Err(RosterError::Api(format!(
                            "Unknown sort direction: {other} (use asc or desc)"
                        )))
                    }
                };
                (column, direction)
            }
            None => (s, SortDirection::Asc),
        };
        let column: ColumnKey = column.parse()?;
        if !column.spec().sortable {
            return Err(RosterError::Api(format!("Column {column} is not sortable")));
        }
        Ok(Self { column, direction })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", self.column, dir)
    }
}

/// Stable sort; rows that compare equal keep their roster order.
pub fn sort_rows(rows: &mut [&Employee], sort: &SortSpec) {
    rows.sort_by(|a, b| {
        let ord = sort.column.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// One page of a row sequence. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub number: usize,
    pub size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl Page {
    /// Row positions covered by this page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.number - 1) * self.size;
        let end = (start + self.size).min(self.total_rows);
        start.min(end)..end
    }
}

/// Locate page `requested` of `total_rows` rows. Page 0 is treated as 1 and pages past the
/// end clamp to the last page; an empty sequence has a single empty page.
pub fn paginate(total_rows: usize, requested: usize, size: usize) -> Page {
    let size = size.max(1);
    let total_pages = total_rows.div_ceil(size).max(1);
    Page {
        number: requested.clamp(1, total_pages),
        size,
        total_rows,
        total_pages,
    }
}
