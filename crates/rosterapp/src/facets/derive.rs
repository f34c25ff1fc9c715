//! Option lists derived from the full roster.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::{Facet, FacetKind, FacetValue, FACETS};
use crate::model::{Employee, ACTIVE_LABEL, INACTIVE_LABEL};

/// The selectable options of every facet.
///
/// Options keep the order in which they were first seen in the roster. Consumers must not
/// rely on that order beyond display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetOptions {
    options: BTreeMap<Facet, Vec<String>>,
}

impl FacetOptions {
    pub fn get(&self, facet: Facet) -> &[String] {
        self.options.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, facet: Facet, option: &str) -> bool {
        self.get(facet).iter().any(|o| o == option)
    }

    /// Facets with their options, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> {
        Facet::all().map(move |facet| (facet, self.get(facet)))
    }
}

/// Scan the full roster once and collect each facet's distinct options.
///
/// Must be handed the complete record set, never a filtered subset, so that narrowing the
/// view does not make options disappear. `isActive` always offers both labels.
pub fn derive_facets(records: &[Employee]) -> FacetOptions {
    let options = FACETS
        .iter()
        .map(|spec| {
            let values = match spec.kind {
                FacetKind::Flag => vec![ACTIVE_LABEL.to_string(), INACTIVE_LABEL.to_string()],
                FacetKind::Text | FacetKind::List => distinct(records, spec.facet),
            };
            (spec.facet, values)
        })
        .collect::<BTreeMap<_, _>>();

    let facets = FacetOptions { options };
    tracing::debug!(
        records = records.len(),
        departments = facets.get(Facet::Department).len(),
        skills = facets.get(Facet::Skills).len(),
        "derived facet options"
    );
    facets
}

fn distinct(records: &[Employee], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for employee in records {
        for option in FacetValue::of(facet, employee).options() {
            if seen.insert(option) {
                values.push(option.to_string());
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::employee;

    fn roster() -> Vec<Employee> {
        vec![
            employee(1)
                .department("Engineering")
                .position("Developer")
                .location("Lisbon")
                .skills(&["Rust", "SQL"])
                .build(),
            employee(2)
                .department("Sales")
                .position("Manager")
                .location("Lisbon")
                .skills(&["Negotiation"])
                .build(),
            employee(3)
                .department("Engineering")
                .position("Manager")
                .location("Berlin")
                .skills(&["SQL", "Go"])
                .active(false)
                .build(),
        ]
    }

    #[test]
    fn collects_distinct_values_in_first_seen_order() {
        let facets = derive_facets(&roster());
        assert_eq!(facets.get(Facet::Department), ["Engineering", "Sales"]);
        assert_eq!(facets.get(Facet::Position), ["Developer", "Manager"]);
        assert_eq!(facets.get(Facet::Location), ["Lisbon", "Berlin"]);
    }

    #[test]
    fn skills_are_the_union_across_records() {
        let facets = derive_facets(&roster());
        assert_eq!(
            facets.get(Facet::Skills),
            ["Rust", "SQL", "Negotiation", "Go"]
        );
    }

    #[test]
    fn active_facet_is_fixed() {
        let facets = derive_facets(&roster());
        assert_eq!(facets.get(Facet::IsActive), ["Active", "Inactive"]);
        assert_eq!(
            derive_facets(&[]).get(Facet::IsActive),
            ["Active", "Inactive"]
        );
    }

    #[test]
    fn empty_roster_yields_empty_derived_sets() {
        let facets = derive_facets(&[]);
        assert!(facets.get(Facet::Department).is_empty());
        assert!(facets.get(Facet::Skills).is_empty());
        assert_eq!(facets.iter().count(), FACETS.len());
    }

    #[test]
    fn serializes_keyed_by_facet_name() {
        let json = serde_json::to_value(derive_facets(&roster())).unwrap();
        assert_eq!(json["isActive"], serde_json::json!(["Active", "Inactive"]));
        assert_eq!(json["location"], serde_json::json!(["Lisbon", "Berlin"]));
    }
}
