//! # Free-Text Search
//!
//! Search is deliberately simple: a record matches when the query, lowercased, is a substring
//! of any of a fixed list of text fields, also lowercased. There is no ranking, no fuzzy
//! matching and no tokenization; `"eng"` matches `"Engineering"` and `"ada moss"` matches
//! nothing, because no single field contains it.
//!
//! Leading and trailing whitespace is trimmed. An empty or whitespace-only query matches
//! every record.

use serde::Serialize;

use crate::model::Employee;

/// Text fields searched, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
    Email,
    Department,
    Position,
    Location,
}

pub const SEARCH_FIELDS: [SearchField; 6] = [
    SearchField::FirstName,
    SearchField::LastName,
    SearchField::Email,
    SearchField::Department,
    SearchField::Position,
    SearchField::Location,
];

impl SearchField {
    pub fn value(self, employee: &Employee) -> &str {
        match self {
            Self::FirstName => &employee.first_name,
            Self::LastName => &employee.last_name,
            Self::Email => &employee.email,
            Self::Department => &employee.department,
            Self::Position => &employee.position,
            Self::Location => &employee.location,
        }
    }
}

/// The submitted search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    text: String,
    #[serde(skip)]
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    pub fn set_query(&mut self, text: &str) {
        *self = Self::new(text);
    }

    /// The trimmed query as submitted.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        if self.is_empty() {
            return true;
        }
        SEARCH_FIELDS
            .iter()
            .any(|field| field.value(employee).to_lowercase().contains(&self.needle))
    }

    pub fn predicate(&self) -> impl Fn(&Employee) -> bool + '_ {
        move |employee| self.matches(employee)
    }
}
