use crate::commands::{CmdMessage, CmdResult};
use crate::dashboard::Dashboard;
use crate::model::Employee;
use crate::view::{paginate, sort_rows, SortSpec};

/// How the caller wants the visible rows arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-based grid page
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortSpec>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            sort: None,
        }
    }
}

/// The rows the current view shows.
///
/// Grid views sort (when asked) and page the visible set. The compact table lists every
/// visible row in roster order.
pub fn run(dashboard: &Dashboard, options: &ListOptions) -> CmdResult {
    let view = dashboard.view().clone();
    let mut rows = dashboard.visible_records();
    let matched = rows.len();
    let total = dashboard.records().len();

    let mut result = CmdResult::default();
    let rows: Vec<Employee> = if view.is_compact() {
        if options.sort.is_some() {
            result.add_message(CmdMessage::info("Sorting is only available in the grid view."));
        }
        rows.into_iter().cloned().collect()
    } else {
        if let Some(sort) = &options.sort {
            sort_rows(&mut rows, sort);
        }
        let page = paginate(matched, options.page, options.page_size);
        let shown: Vec<Employee> = rows[page.range()].iter().map(|e| (*e).clone()).collect();
        result = result.with_page(page).with_sort(options.sort);
        shown
    };

    if dashboard.has_pending_changes() {
        result.add_message(CmdMessage::warning(
            "Some filter changes have not been applied yet.",
        ));
    }

    result
        .with_listed(rows, matched, total)
        .with_view(view)
        .with_filters(dashboard.applied_selection().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardEvent;
    use crate::source::memory::fixtures::employee;
    use crate::view::{ColumnKey, SortDirection, ViewConfig};

    fn dashboard(count: u32) -> Dashboard {
        let records = (1..=count)
            .map(|id| employee(id).age(20 + (id * 7) % 30).build())
            .collect();
        Dashboard::new(records, ViewConfig::default())
    }

    fn ids(result: &CmdResult) -> Vec<u32> {
        result.listed.iter().map(|e| e.id).collect()
    }

    #[test]
    fn grid_pages_the_visible_rows() {
        let db = dashboard(23);
        let options = ListOptions {
            page: 3,
            ..Default::default()
        };
        let result = run(&db, &options);
        assert_eq!(ids(&result), vec![21, 22, 23]);
        assert_eq!(result.matched, Some(23));
        assert_eq!(result.page.unwrap().total_pages, 3);
    }

    #[test]
    fn grid_sorts_before_paging() {
        let db = dashboard(12);
        let options = ListOptions {
            page: 1,
            page_size: 3,
            sort: Some(SortSpec::new(ColumnKey::Id, SortDirection::Desc)),
        };
        let result = run(&db, &options);
        assert_eq!(ids(&result), vec![12, 11, 10]);
        assert_eq!(result.sort, options.sort);
    }

    #[test]
    fn compact_table_lists_everything_unsorted() {
        let mut db = dashboard(23);
        db.handle(DashboardEvent::ViewportResized { width: 400 });
        let options = ListOptions {
            page: 2,
            page_size: 10,
            sort: Some(SortSpec::new(ColumnKey::Id, SortDirection::Desc)),
        };
        let result = run(&db, &options);
        assert_eq!(result.listed.len(), 23);
        assert_eq!(result.listed[0].id, 1);
        assert!(result.page.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn warns_about_unapplied_toggles() {
        let mut db = dashboard(3);
        db.toggle_facet_option("department", "Engineering");
        let result = run(&db, &ListOptions::default());
        assert_eq!(result.listed.len(), 3);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn empty_result_still_reports_totals() {
        let mut db = dashboard(3);
        db.submit_search("nobody");
        let result = run(&db, &ListOptions::default());
        assert!(result.listed.is_empty());
        assert_eq!(result.matched, Some(0));
        assert_eq!(result.total, Some(3));
    }
}
