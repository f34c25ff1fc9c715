use serde::Serialize;

use super::columns::{ColumnSpec, COLUMNS};

/// How the visible rows are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    Grid,
    CompactTable,
}

/// Thresholds for view selection, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Widths strictly below this select the compact table
    pub breakpoint: u32,
    /// Lower bound of the layout width
    pub layout_floor: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768,
            layout_floor: 420,
        }
    }
}

/// The outcome of view selection for one viewport width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSpec {
    pub viewport_width: u32,
    pub mode: ViewMode,
    pub columns: Vec<&'static ColumnSpec>,
    pub layout_width: u32,
}

impl ViewSpec {
    pub fn is_compact(&self) -> bool {
        self.mode == ViewMode::CompactTable
    }

    /// Sum of the selected columns' minimum widths, before clamping.
    pub fn natural_width(&self) -> u32 {
        self.columns.iter().map(|c| c.effective_min_width()).sum()
    }
}

/// Pick the render mode and columns for a viewport `width`.
pub fn select_view(width: u32, config: &ViewConfig) -> ViewSpec {
    let mode = if width < config.breakpoint {
        ViewMode::CompactTable
    } else {
        ViewMode::Grid
    };

    let columns: Vec<&'static ColumnSpec> = COLUMNS
        .iter()
        .filter(|spec| match mode {
            ViewMode::Grid => spec.grid,
            ViewMode::CompactTable => spec.compact,
        })
        .collect();

    let natural: u32 = columns.iter().map(|c| c.effective_min_width()).sum();
    let ceiling = width.max(config.layout_floor);
    let layout_width = natural.clamp(config.layout_floor, ceiling);

    ViewSpec {
        viewport_width: width,
        mode,
        columns,
        layout_width,
    }
}
