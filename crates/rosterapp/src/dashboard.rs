//! # Dashboard State
//!
//! [`Dashboard`] owns the loaded roster and every piece of state derived from user or
//! environment events. It is the single place the rendering side reads from.
//!
//! ## Events
//!
//! | Event | Effect |
//! |-------|--------|
//! | `ToggleFacetOption` | flips an option in the **pending** selection |
//! | `ApplyFilters` | commits pending → applied, recomputes the visible set |
//! | `ClearAllFilters` | empties pending and applied, recomputes |
//! | `SubmitSearch` | replaces the search query, recomputes |
//! | `ViewportResized` | re-selects the view |
//!
//! Every event is handled synchronously: when `handle` returns, the visible set and the view
//! reflect it. The visible set is cached as positions into the roster and rebuilt only when
//! the applied selection or the query changes.
//!
//! Facet options are derived once, from the full roster, when the dashboard is built.

use serde::Serialize;

use crate::compose::visible_indices;
use crate::facets::{derive_facets, Facet, FacetOptions, FilterSelection};
use crate::model::{Employee, RosterStats};
use crate::search::SearchQuery;
use crate::view::{select_view, ViewConfig, ViewSpec};

/// Width assumed until the first resize notification.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event")]
pub enum DashboardEvent {
    ToggleFacetOption { facet: String, value: String },
    ClearAllFilters,
    ApplyFilters,
    SubmitSearch { text: String },
    ViewportResized { width: u32 },
}

pub struct Dashboard {
    records: Vec<Employee>,
    facets: FacetOptions,
    pending: FilterSelection,
    applied: FilterSelection,
    search: SearchQuery,
    view_config: ViewConfig,
    view: ViewSpec,
    visible: Vec<usize>,
}

impl Dashboard {
    pub fn new(records: Vec<Employee>, view_config: ViewConfig) -> Self {
        let facets = derive_facets(&records);
        let view = select_view(DEFAULT_VIEWPORT_WIDTH, &view_config);
        let visible = (0..records.len()).collect();
        Self {
            records,
            facets,
            pending: FilterSelection::new(),
            applied: FilterSelection::new(),
            search: SearchQuery::default(),
            view_config,
            view,
            visible,
        }
    }

    pub fn handle(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::ToggleFacetOption { facet, value } => {
                self.toggle_facet_option(&facet, &value)
            }
            DashboardEvent::ClearAllFilters => self.clear_all_filters(),
            DashboardEvent::ApplyFilters => self.apply_filters(),
            DashboardEvent::SubmitSearch { text } => self.submit_search(&text),
            DashboardEvent::ViewportResized { width } => self.viewport_resized(width),
        }
    }

    /// Flip `value` in the pending selection. Unknown facet names are ignored.
    pub fn toggle_facet_option(&mut self, facet: &str, value: &str) {
        self.pending = self.pending.toggle_named(facet, value);
    }

    /// Add `value` to the pending selection for `facet`, leaving it selected if it already was.
    pub fn select_facet_option(&mut self, facet: Facet, value: &str) {
        self.pending = self.pending.with_option(facet, value);
    }

    pub fn clear_all_filters(&mut self) {
        self.pending = self.pending.clear_all();
        self.applied = self.applied.clear_all();
        self.recompute();
    }

    pub fn apply_filters(&mut self) {
        if self.applied != self.pending {
            self.applied = self.pending.clone();
            self.recompute();
        }
    }

    pub fn submit_search(&mut self, text: &str) {
        let query = SearchQuery::new(text);
        if query != self.search {
            self.search = query;
            self.recompute();
        }
    }

    pub fn viewport_resized(&mut self, width: u32) {
        let view = select_view(width, &self.view_config);
        if view.mode != self.view.mode {
            tracing::debug!(width, mode = ?view.mode, "view mode changed");
        }
        self.view = view;
    }

    fn recompute(&mut self) {
        self.visible = visible_indices(
            &self.records,
            self.search.predicate(),
            self.applied.predicate(),
        );
        tracing::debug!(
            visible = self.visible.len(),
            total = self.records.len(),
            query = self.search.as_str(),
            "recomputed visible records"
        );
    }

    /// The current result set, in roster order.
    pub fn visible_records(&self) -> Vec<&Employee> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn view(&self) -> &ViewSpec {
        &self.view
    }

    pub fn facet_options(&self) -> &FacetOptions {
        &self.facets
    }

    pub fn pending_selection(&self) -> &FilterSelection {
        &self.pending
    }

    pub fn applied_selection(&self) -> &FilterSelection {
        &self.applied
    }

    /// True when toggles have been made since the last apply or clear.
    pub fn has_pending_changes(&self) -> bool {
        self.pending != self.applied
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn stats(&self) -> RosterStats {
        RosterStats::from_records(&self.records)
    }
}
