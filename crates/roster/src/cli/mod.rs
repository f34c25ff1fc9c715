//! # CLI Behavior
//!
//! One UI client for the roster. It is the only place that knows about the terminal.
//!
//! ## Naked Execution
//!
//! `roster` with no subcommand behaves like `roster list`.
//!
//! ## Viewport Width
//!
//! The library picks grid or compact table from a width in pixels. The CLI supplies it:
//!
//! 1. `--width PX` when given
//! 2. terminal columns × `cell_px` (see `roster config`) when stdout is a terminal
//! 3. 1024 otherwise
//!
//! ## Output
//!
//! Commands print text tables by default and the raw `CmdResult` with `--json`. Logs go to
//! stderr, so `--json` output stays machine-readable at any verbosity.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context setup and per-command handlers
//! - `render`: text output (tables, facets, stats, messages)
//! - `shell`: line-oriented event loop
//! - `styles`: terminal styles
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;
mod shell;
mod styles;

pub use commands::run;
