//! # Result Composition
//!
//! The visible set is the roster filtered by the search predicate AND the facet predicate.
//! Composition is a stable filter: survivors keep their relative order from the source, and
//! nothing is re-sorted here. Sorting and paging are view concerns (see [`crate::view`]).
//!
//! Both functions are pure. Calling them again with the same inputs yields the same
//! sequence, which is what lets the dashboard cache the result and recompute it only when an
//! input changes.

use crate::facets::FilterSelection;
use crate::model::Employee;
use crate::search::SearchQuery;

/// Positions in `all` of the records accepted by both predicates, ascending.
pub fn visible_indices<S, F>(all: &[Employee], search: S, filter: F) -> Vec<usize>
where
    S: Fn(&Employee) -> bool,
    F: Fn(&Employee) -> bool,
{
    all.iter()
        .enumerate()
        .filter(|(_, employee)| search(employee) && filter(employee))
        .map(|(index, _)| index)
        .collect()
}

/// Records accepted by both the search query and the filter selection, in roster order.
pub fn visible_records<'a>(
    all: &'a [Employee],
    search: &SearchQuery,
    filter: &FilterSelection,
) -> Vec<&'a Employee> {
    visible_indices(all, search.predicate(), filter.predicate())
        .into_iter()
        .map(|index| &all[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::Facet;
    use crate::source::memory::fixtures::employee;
    use proptest::prelude::*;

    fn two_records() -> Vec<Employee> {
        vec![
            employee(1)
                .department("Eng")
                .position("Dev")
                .skills(&["Go"])
                .active(true)
                .build(),
            employee(2)
                .department("Sales")
                .position("Dev")
                .skills(&["SQL"])
                .active(false)
                .build(),
        ]
    }

    #[test]
    fn active_filter_with_blank_search_yields_first_record() {
        let records = two_records();
        let filter = FilterSelection::new().toggle(Facet::IsActive, "Active");
        let visible = visible_records(&records, &SearchQuery::new(""), &filter);
        assert_eq!(visible, vec![&records[0]]);
    }

    #[test]
    fn search_and_filter_are_conjunctive() {
        let records = two_records();
        let filter = FilterSelection::new().toggle(Facet::Position, "Dev");
        let visible = visible_records(&records, &SearchQuery::new("sales"), &filter);
        assert_eq!(visible, vec![&records[1]]);

        let none = visible_records(
            &records,
            &SearchQuery::new("sales"),
            &FilterSelection::new().toggle(Facet::Skills, "Go"),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn generic_predicates_compose() {
        let records = two_records();
        let indices = visible_indices(&records, |_| true, |e| e.id == 2);
        assert_eq!(indices, vec![1]);
    }

    fn arb_employee() -> impl Strategy<Value = Employee> {
        (
            0u32..1000,
            prop::sample::select(vec!["Engineering", "Sales", "Support", "Finance"]),
            prop::sample::select(vec!["Developer", "Manager", "Analyst"]),
            prop::collection::vec(prop::sample::select(vec!["Go", "SQL", "Rust", "Excel"]), 0..4),
            any::<bool>(),
        )
            .prop_map(|(id, department, position, skills, active)| {
                employee(id)
                    .department(department)
                    .position(position)
                    .skills(&skills)
                    .active(active)
                    .build()
            })
    }

    fn arb_selection() -> impl Strategy<Value = FilterSelection> {
        prop::collection::vec(
            (
                prop::sample::select(vec![
                    Facet::Department,
                    Facet::Position,
                    Facet::IsActive,
                    Facet::Skills,
                ]),
                prop::sample::select(vec!["Sales", "Manager", "Active", "Go", "Nope"]),
            ),
            0..6,
        )
        .prop_map(|toggles| {
            toggles
                .into_iter()
                .fold(FilterSelection::new(), |acc, (facet, value)| {
                    acc.toggle(facet, value)
                })
        })
    }

    proptest! {
        #[test]
        fn no_restrictions_returns_everything_in_order(
            records in prop::collection::vec(arb_employee(), 0..20),
        ) {
            let visible = visible_records(&records, &SearchQuery::new(""), &FilterSelection::new());
            let expected: Vec<&Employee> = records.iter().collect();
            prop_assert_eq!(visible, expected);
        }

        #[test]
        fn recomputation_is_idempotent(
            records in prop::collection::vec(arb_employee(), 0..20),
            selection in arb_selection(),
            query in "[a-z]{0,3}",
        ) {
            let search = SearchQuery::new(&query);
            let first = visible_records(&records, &search, &selection);
            let second = visible_records(&records, &search, &selection);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn result_is_an_ordered_subsequence(
            records in prop::collection::vec(arb_employee(), 0..20),
            selection in arb_selection(),
        ) {
            let indices = visible_indices(&records, |_| true, selection.predicate());
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            for (i, e) in records.iter().enumerate() {
                prop_assert_eq!(indices.contains(&i), selection.matches(e));
            }
        }

        #[test]
        fn double_toggle_is_identity(
            selection in arb_selection(),
            value in prop::sample::select(vec!["Sales", "Go", "Active", "Unknown"]),
        ) {
            for facet in Facet::all() {
                prop_assert_eq!(selection.toggle(facet, value).toggle(facet, value), selection.clone());
            }
        }

        #[test]
        fn clear_all_accepts_every_record(
            records in prop::collection::vec(arb_employee(), 0..20),
            selection in arb_selection(),
        ) {
            let cleared = selection.clear_all();
            prop_assert!(records.iter().all(|e| cleared.matches(e)));
        }
    }
}
