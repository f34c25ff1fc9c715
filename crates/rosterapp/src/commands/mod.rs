use serde::Serialize;

use crate::facets::{FacetOptions, FilterSelection};
use crate::model::{Employee, RosterStats};
use crate::view::{Page, SortSpec, ViewSpec};

pub mod columns;
pub mod facets;
pub mod list;
pub mod stats;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Everything a command hands back to a UI client.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    /// Rows to display, already sorted and paged for the view
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed: Vec<Employee>,
    /// Size of the whole result set the rows were taken from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<FacetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RosterStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, rows: Vec<Employee>, matched: usize, total: usize) -> Self {
        self.listed = rows;
        self.matched = Some(matched);
        self.total = Some(total);
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_view(mut self, view: ViewSpec) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_filters(mut self, filters: FilterSelection) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_facets(mut self, facets: FacetOptions) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_stats(mut self, stats: RosterStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
