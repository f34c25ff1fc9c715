//! Multi-select filter state.
//!
//! [`FilterSelection`] is an immutable value. Transitions (`toggle`, `clear_all`, ...) return
//! a new selection, which keeps the predicate testable without any UI around it and lets the
//! dashboard hold a pending and an applied selection side by side.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{get_spec, Facet, FacetValue};
use crate::model::Employee;

/// Selected options per facet.
///
/// Facets without a selected option are not stored, so a selection that was toggled back to
/// its previous state compares equal to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSelection {
    selected: BTreeMap<Facet, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `facet` if it is not selected, deselect it otherwise.
    pub fn toggle(&self, facet: Facet, value: &str) -> Self {
        let mut next = self.clone();
        let options = next.selected.entry(facet).or_default();
        if !options.remove(value) {
            options.insert(value.to_string());
        }
        if options.is_empty() {
            next.selected.remove(&facet);
        }
        next
    }

    /// [`toggle`](Self::toggle) addressed by facet name. Unknown names leave the selection
    /// unchanged.
    pub fn toggle_named(&self, facet: &str, value: &str) -> Self {
        match get_spec(facet) {
            Some(spec) => self.toggle(spec.facet, value),
            None => {
                tracing::debug!(facet, "ignoring toggle for unknown facet");
                self.clone()
            }
        }
    }

    /// Ensure `value` is selected for `facet`.
    pub fn with_option(&self, facet: Facet, value: &str) -> Self {
        let mut next = self.clone();
        next.selected
            .entry(facet)
            .or_default()
            .insert(value.to_string());
        next
    }

    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    pub fn selected(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.selected.get(&facet)
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).is_some_and(|set| set.contains(value))
    }

    /// True when no facet restricts anything.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Facets that currently restrict the result, with their options.
    pub fn active_facets(&self) -> impl Iterator<Item = (Facet, &BTreeSet<String>)> {
        self.selected.iter().map(|(facet, options)| (*facet, options))
    }

    /// AND across facets, OR within a facet.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.selected.iter().all(|(facet, options)| {
            let value = FacetValue::of(*facet, employee);
            options.iter().any(|option| value.matches_option(option))
        })
    }

    pub fn predicate(&self) -> impl Fn(&Employee) -> bool + '_ {
        move |employee| self.matches(employee)
    }
}
