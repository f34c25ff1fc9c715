use crate::commands::CmdResult;
use crate::dashboard::Dashboard;

/// Headline counts over the whole roster, independent of filters.
pub fn run(dashboard: &Dashboard) -> CmdResult {
    CmdResult::default().with_stats(dashboard.stats())
}
