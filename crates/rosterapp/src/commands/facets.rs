use crate::commands::CmdResult;
use crate::dashboard::Dashboard;

/// Facet options for populating filter controls, with the selections currently applied.
pub fn run(dashboard: &Dashboard) -> CmdResult {
    CmdResult::default()
        .with_facets(dashboard.facet_options().clone())
        .with_filters(dashboard.applied_selection().clone())
}
