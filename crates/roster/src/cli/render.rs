//! # Rendering
//!
//! Turns [`CmdResult`] values into text. Nothing here knows how a result was produced.
//!
//! ## Table Layout
//!
//! Column widths are derived from the pixel metadata of the selected view, at `cell_px`
//! pixels per terminal cell:
//!
//! - **Grid**: columns are fitted to the layout width. Spare cells go to flex columns in
//!   proportion to their weight; when the layout is narrower than the columns' minimums,
//!   every column shrinks in proportion to its minimum.
//! - **Compact table**: every column keeps its minimum width and the table is as wide as it
//!   needs to be, the terminal's answer to a horizontally scrolling table.
//!
//! Cell text wider than its column is cut with `…`. Widths are measured with
//! `unicode-width`, so accented names line up.

use rosterapp::commands::{CmdMessage, CmdResult, MessageLevel};
use rosterapp::config::RosterConfig;
use rosterapp::model::Employee;
use rosterapp::view::{Align, CellOptions, ColumnSpec, ViewSpec};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::THEME;

/// Space between columns.
const GAP: &str = "  ";
/// No column is squeezed below this many cells.
const MIN_CELLS: usize = 3;
const ELLIPSIS: char = '…';
pub const EMPTY_LIST: &str = "No employees found.";

/// Presentation settings the renderer needs from configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub cells: CellOptions,
    pub cell_px: u32,
}

impl RenderOptions {
    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            cells: config.cell_options(),
            cell_px: config.cell_px(),
        }
    }
}

fn min_cells(spec: &ColumnSpec, cell_px: u32) -> usize {
    ((spec.effective_min_width() / cell_px.max(1)) as usize).max(MIN_CELLS)
}

/// Width in cells of each of the view's columns.
pub fn column_widths(view: &ViewSpec, cell_px: u32) -> Vec<usize> {
    let mins: Vec<usize> = view.columns.iter().map(|c| min_cells(c, cell_px)).collect();
    if view.is_compact() {
        return mins;
    }

    let gaps = GAP.width() * view.columns.len().saturating_sub(1);
    let room = ((view.layout_width / cell_px.max(1)) as usize).saturating_sub(gaps);
    let natural: usize = mins.iter().sum();

    if room < natural {
        return mins
            .iter()
            .map(|m| (m * room / natural).max(MIN_CELLS))
            .collect();
    }

    let weights: Vec<usize> = view
        .columns
        .iter()
        .map(|c| c.flex.unwrap_or(0) as usize)
        .collect();
    let total_weight: usize = weights.iter().sum();
    if total_weight == 0 {
        return mins;
    }
    let spare = room - natural;
    let mut widths: Vec<usize> = mins
        .iter()
        .zip(&weights)
        .map(|(m, w)| m + spare * w / total_weight)
        .collect();
    // Rounding leftovers go to the last flex column.
    let used: usize = widths.iter().sum();
    if let Some(last) = weights.iter().rposition(|w| *w > 0) {
        widths[last] += room - used;
    }
    widths
}

/// Cut `text` to `width` cells, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

fn fit(text: &str, width: usize, align: Align) -> String {
    let text = truncate_to_width(text, width);
    let pad = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{pad}"),
        Align::Right => format!("{pad}{text}"),
    }
}

fn table_line<I>(view: &ViewSpec, widths: &[usize], cells: I) -> String
where
    I: Iterator<Item = String>,
{
    view.columns
        .iter()
        .zip(widths)
        .zip(cells)
        .map(|((spec, width), cell)| fit(&cell, *width, spec.align))
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

fn render_rows(view: &ViewSpec, rows: &[Employee], options: &RenderOptions) -> String {
    let widths = column_widths(view, options.cell_px);
    let mut out = String::new();

    let header = table_line(view, &widths, view.columns.iter().map(|c| c.header.to_string()));
    out.push_str(&THEME.header.apply_to(header).to_string());
    out.push('\n');

    let rule = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join(GAP);
    out.push_str(&THEME.faint.apply_to(rule).to_string());
    out.push('\n');

    for employee in rows {
        let line = table_line(
            view,
            &widths,
            view.columns
                .iter()
                .map(|c| c.key.render(employee, &options.cells)),
        );
        if employee.is_active {
            out.push_str(&line);
        } else {
            out.push_str(&THEME.inactive.apply_to(line).to_string());
        }
        out.push('\n');
    }
    out
}

fn render_footer(result: &CmdResult) -> String {
    let matched = result.matched.unwrap_or(result.listed.len());
    let total = result.total.unwrap_or(matched);
    let filtered = if matched < total {
        format!(" (filtered from {total})")
    } else {
        String::new()
    };

    match &result.page {
        Some(page) if matched > 0 => {
            let range = page.range();
            format!(
                "Showing {}-{} of {} employees{} · page {}/{}",
                range.start + 1,
                range.end,
                matched,
                filtered,
                page.number,
                page.total_pages
            )
        }
        _ => format!("Showing {} of {} employees", matched, total),
    }
}

fn render_filters(result: &CmdResult) -> Option<String> {
    let filters = result.filters.as_ref()?;
    if filters.is_empty() {
        return None;
    }
    let parts: Vec<String> = filters
        .active_facets()
        .map(|(facet, options)| {
            let options: Vec<&str> = options.iter().map(String::as_str).collect();
            format!("{}: {}", facet, options.join(", "))
        })
        .collect();
    Some(format!("Filters: {}", parts.join("; ")))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let (label, style) = match message.level {
            MessageLevel::Info => ("info", &THEME.info),
            MessageLevel::Warning => ("warning", &THEME.warning),
            MessageLevel::Error => ("error", &THEME.error),
        };
        out.push_str(&format!(
            "{} {}\n",
            style.apply_to(format!("{label}:")),
            message.content
        ));
    }
    out
}

/// The employee table for a `list` result, or the empty-state line.
pub fn render_list(result: &CmdResult, options: &RenderOptions) -> String {
    let mut out = String::new();
    if let Some(filters) = render_filters(result) {
        out.push_str(&THEME.muted.apply_to(filters).to_string());
        out.push('\n');
    }

    match &result.view {
        Some(view) if !result.listed.is_empty() => {
            out.push_str(&render_rows(view, &result.listed, options));
            out.push_str(&THEME.muted.apply_to(render_footer(result)).to_string());
            out.push('\n');
        }
        _ => {
            out.push_str(EMPTY_LIST);
            out.push('\n');
        }
    }

    out.push_str(&render_messages(&result.messages));
    out
}

/// Every facet with its options; applied options are checked.
pub fn render_facets(result: &CmdResult) -> String {
    let Some(facets) = &result.facets else {
        return String::new();
    };
    let mut out = String::new();
    for (facet, options) in facets.iter() {
        let heading = format!("{} ({})", facet.spec().label, facet);
        out.push_str(&THEME.header.apply_to(heading).to_string());
        out.push('\n');
        if options.is_empty() {
            out.push_str(&THEME.muted.apply_to("  (none)").to_string());
            out.push('\n');
        }
        for option in options {
            let selected = result
                .filters
                .as_ref()
                .is_some_and(|f| f.is_selected(facet, option));
            if selected {
                let line = format!("  [x] {option}");
                out.push_str(&THEME.selected.apply_to(line).to_string());
            } else {
                out.push_str(&format!("  [ ] {option}"));
            }
            out.push('\n');
        }
    }
    out
}

pub fn render_stats(result: &CmdResult) -> String {
    let Some(stats) = result.stats else {
        return String::new();
    };
    format!(
        "{:<9}{}\n{:<9}{}\n{:<9}{}\n",
        "Total", stats.total, "Active", stats.active, "Inactive", stats.inactive
    )
}

/// Mode, widths and per-column hints of the selected view.
pub fn render_columns(result: &CmdResult) -> String {
    let Some(view) = &result.view else {
        return String::new();
    };
    let mode = if view.is_compact() {
        "compact table"
    } else {
        "grid"
    };
    let mut out = format!(
        "Mode: {} (viewport {}px, layout {}px, columns {}px)\n",
        mode,
        view.viewport_width,
        view.layout_width,
        view.natural_width()
    );
    let header = format!(
        "{:<16}{:<14}{:>10}{:>6}  {:<7}{}",
        "Column", "Header", "Min (px)", "Flex", "Align", "Sortable"
    );
    out.push_str(&THEME.header.apply_to(header).to_string());
    out.push('\n');
    for spec in &view.columns {
        let align = match spec.align {
            Align::Left => "left",
            Align::Right => "right",
        };
        let flex = spec.flex.map_or_else(|| "-".to_string(), |f| f.to_string());
        let sortable = if spec.sortable && !view.is_compact() {
            "yes"
        } else {
            "no"
        };
        out.push_str(&format!(
            "{:<16}{:<14}{:>10}{:>6}  {:<7}{}\n",
            spec.key.name(),
            spec.header,
            spec.effective_min_width(),
            flex,
            align,
            sortable
        ));
    }
    out
}

pub fn render_json(result: &CmdResult) -> rosterapp::error::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
