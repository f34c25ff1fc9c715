//! # API Facade
//!
//! [`RosterApi`] is the single entry point UI clients use. It owns a [`Dashboard`] plus the
//! presentation settings taken from [`RosterConfig`], and forwards each call to the matching
//! function in [`crate::commands`].
//!
//! The facade:
//! - **Loads** the roster from any [`DataSource`]
//! - **Normalizes inputs** (`facet=value` arguments, sort specs)
//! - **Returns structured types** ([`CmdResult`]), never formatted text
//!
//! Business rules live in the dashboard and the command modules; nothing here writes to
//! stdout or touches the terminal.

use crate::commands::{self, list::ListOptions, CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::dashboard::{Dashboard, DashboardEvent};
use crate::error::{Result, RosterError};
use crate::facets::Facet;
use crate::source::DataSource;
use crate::view::SortSpec;

pub struct RosterApi {
    dashboard: Dashboard,
    page_size: usize,
    page: usize,
    sort: Option<SortSpec>,
}

impl RosterApi {
    pub fn new(dashboard: Dashboard, config: &RosterConfig) -> Self {
        Self {
            dashboard,
            page_size: config.page_size(),
            page: 1,
            sort: None,
        }
    }

    /// Load the roster from `source` and build a dashboard with `config`'s thresholds.
    pub fn load<S: DataSource>(source: &S, config: &RosterConfig) -> Result<Self> {
        let records = source.load()?;
        tracing::info!(
            source = %source.describe(),
            records = records.len(),
            "loaded roster"
        );
        let dashboard = Dashboard::new(records, config.view_config());
        Ok(Self::new(dashboard, config))
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Feed one event to the dashboard and return the listing it leads to.
    pub fn dispatch(&mut self, event: DashboardEvent) -> CmdResult {
        let resets_page = !matches!(
            event,
            DashboardEvent::ViewportResized { .. } | DashboardEvent::ToggleFacetOption { .. }
        );
        self.dashboard.handle(event);
        if resets_page {
            self.page = 1;
        }
        self.list()
    }

    /// Select the options given as `facet=value` arguments and apply them.
    ///
    /// Options no record carries are still applied (they match nothing), with a warning.
    pub fn apply_filter_args<I: AsRef<str>>(&mut self, args: &[I]) -> Result<Vec<CmdMessage>> {
        let mut messages = Vec::new();
        for arg in args {
            let (facet, value) = parse_filter_arg(arg.as_ref())?;
            if !self.dashboard.facet_options().contains(facet, &value) {
                messages.push(CmdMessage::warning(format!(
                    "No employee has {facet} '{value}'"
                )));
            }
            self.dashboard.select_facet_option(facet, &value);
        }
        self.dashboard.apply_filters();
        self.page = 1;
        Ok(messages)
    }

    pub fn search(&mut self, text: &str) -> CmdResult {
        self.dispatch(DashboardEvent::SubmitSearch {
            text: text.to_string(),
        })
    }

    pub fn resize(&mut self, width: u32) -> CmdResult {
        self.dispatch(DashboardEvent::ViewportResized { width })
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Parse and set a sort, e.g. `salary:desc`.
    pub fn sort_by(&mut self, spec: &str) -> Result<()> {
        self.sort = Some(spec.parse()?);
        Ok(())
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(
            &self.dashboard,
            &ListOptions {
                page: self.page,
                page_size: self.page_size,
                sort: self.sort,
            },
        )
    }

    pub fn facets(&self) -> CmdResult {
        commands::facets::run(&self.dashboard)
    }

    pub fn stats(&self) -> CmdResult {
        commands::stats::run(&self.dashboard)
    }

    pub fn columns(&self) -> CmdResult {
        commands::columns::run(&self.dashboard)
    }
}

/// Split a `facet=value` argument. The facet may be any accepted spelling.
pub fn parse_filter_arg(arg: &str) -> Result<(Facet, String)> {
    let (facet, value) = arg.split_once('=').ok_or_else(|| {
        RosterError::Api(format!("Invalid filter '{arg}': expected facet=value"))
    })?;
    let value = value.trim();
    if value.is_empty() {
        return Err(RosterError::Api(format!(
            "Invalid filter '{arg}': missing value"
        )));
    }
    Ok((facet.parse()?, value.to_string()))
}
