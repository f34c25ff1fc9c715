//! Uniform access to a record's facet values.

use super::Facet;
use crate::model::Employee;

/// A borrowed view of the value a record holds for one facet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacetValue<'a> {
    Text(&'a str),
    Flag(bool),
    List(&'a [String]),
}

impl<'a> FacetValue<'a> {
    pub fn of(facet: Facet, employee: &'a Employee) -> Self {
        match facet {
            Facet::Department => Self::Text(&employee.department),
            Facet::Position => Self::Text(&employee.position),
            Facet::Location => Self::Text(&employee.location),
            Facet::IsActive => Self::Flag(employee.is_active),
            Facet::Skills => Self::List(&employee.skills),
        }
    }

    /// Whether this value satisfies a single selected option.
    ///
    /// Options the value cannot hold (a misspelled department, a label other than
    /// `Active` / `Inactive`) never match.
    pub fn matches_option(&self, option: &str) -> bool {
        match self {
            Self::Text(value) => *value == option,
            Self::Flag(flag) => flag_label(*flag) == option,
            Self::List(items) => items.iter().any(|item| item == option),
        }
    }

    /// The option strings this value contributes to its facet's option list.
    pub fn options(&self) -> Vec<&'a str> {
        match *self {
            Self::Text(value) => vec![value],
            Self::Flag(flag) => vec![flag_label(flag)],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

fn flag_label(flag: bool) -> &'static str {
    if flag {
        crate::model::ACTIVE_LABEL
    } else {
        crate::model::INACTIVE_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::employee;

    #[test]
    fn text_matches_exactly() {
        let e = employee(1).department("Engineering").build();
        let value = FacetValue::of(Facet::Department, &e);
        assert!(value.matches_option("Engineering"));
        assert!(!value.matches_option("engineering"));
        assert!(!value.matches_option("Eng"));
    }

    #[test]
    fn flag_matches_label() {
        let active = employee(1).active(true).build();
        let inactive = employee(2).active(false).build();
        assert!(FacetValue::of(Facet::IsActive, &active).matches_option("Active"));
        assert!(!FacetValue::of(Facet::IsActive, &active).matches_option("Inactive"));
        assert!(FacetValue::of(Facet::IsActive, &inactive).matches_option("Inactive"));
        assert!(!FacetValue::of(Facet::IsActive, &inactive).matches_option("true"));
    }

    #[test]
    fn list_matches_membership() {
        let e = employee(1).skills(&["Go", "SQL"]).build();
        let value = FacetValue::of(Facet::Skills, &e);
        assert!(value.matches_option("SQL"));
        assert!(!value.matches_option("Rust"));
        assert_eq!(value.options(), vec!["Go", "SQL"]);
    }

    #[test]
    fn empty_list_matches_nothing() {
        let e = employee(1).skills(&[]).build();
        assert!(!FacetValue::of(Facet::Skills, &e).matches_option("Go"));
        assert!(FacetValue::of(Facet::Skills, &e).options().is_empty());
    }
}
