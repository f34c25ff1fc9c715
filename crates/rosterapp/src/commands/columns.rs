use crate::commands::CmdResult;
use crate::dashboard::Dashboard;

/// The view (mode, columns, layout width) selected for the current viewport.
pub fn run(dashboard: &Dashboard) -> CmdResult {
    CmdResult::default().with_view(dashboard.view().clone())
}
