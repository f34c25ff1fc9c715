//! # Adaptive Views
//!
//! The roster renders in one of two modes, chosen from the viewport width alone:
//!
//! | Mode | When | Columns | Rows |
//! |------|------|---------|------|
//! | [`ViewMode::Grid`] | `width >= breakpoint` | every grid column, with width/flex hints, full skill lists | sortable, paged |
//! | [`ViewMode::CompactTable`] | `width < breakpoint` | the fixed compact set, skills as a short preview | every visible row, unsorted |
//!
//! There is no hysteresis and no state carried between evaluations: [`select_view`] is a pure
//! function of the width and the [`ViewConfig`], so it can run on every resize notification.
//!
//! ## Columns as Data
//!
//! Column metadata (headers, minimum widths, flex weights, which modes show the column) lives
//! in the [`COLUMNS`] table. Turning a record into cell text is [`ColumnKey::render`], and
//! ordering rows is [`ColumnKey::compare`]. Renderers consume both; neither mode keeps its own
//! copy of the column logic.
//!
//! ## Layout Width
//!
//! The layout width of a view is the sum of its columns' minimum widths (columns without one
//! count [`DEFAULT_MIN_WIDTH`]), clamped to `[layout_floor, max(viewport, layout_floor)]`.

mod columns;
mod rows;
mod select;

pub use columns::{Align, CellOptions, ColumnKey, ColumnSpec, COLUMNS, DEFAULT_MIN_WIDTH};
pub use rows::{paginate, sort_rows, Page, SortDirection, SortSpec};
pub use select::{select_view, ViewConfig, ViewMode, ViewSpec};
