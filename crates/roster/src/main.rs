//! # Roster CLI
//!
//! `roster` is a terminal client for the `rosterapp` library. This file only calls
//! [`cli::run`] and turns an error into a message and exit code; everything else lives in
//! `src/cli/`.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI layer (src/cli/)                                    │
//! │  - clap argument parsing (setup.rs)                      │
//! │  - context wiring + dispatch (commands.rs)               │
//! │  - table, facet and stats rendering (render.rs)          │
//! │  - interactive event loop (shell.rs)                     │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  rosterapp::api::RosterApi                               │
//! │  - loads the roster, forwards events, returns CmdResult  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The library never writes to the terminal. Viewport width, colors and process exit codes
//! are decided here.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
