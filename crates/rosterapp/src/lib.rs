//! # rosterapp
//!
//! UI-agnostic core of the roster directory: an immutable set of employee records, narrowed
//! by multi-select facet filters and a free-text search, and presented through a view that
//! adapts to the viewport width.
//!
//! ## Architecture
//!
//! ```text
//! UI client (CLI, shell, ...)
//!        │  DashboardEvent / facet=value / sort specs
//!        ▼
//!   api::RosterApi ──► commands::*  ──► CmdResult (rows, page, view, facets, stats, messages)
//!        │
//!        ▼
//!   dashboard::Dashboard
//!        ├── facets   (options derived once; FilterSelection predicate)
//!        ├── search   (SearchQuery predicate)
//!        ├── compose  (search AND filters over the full roster, order preserved)
//!        └── view     (select_view: grid or compact table, columns, layout width)
//!        ▲
//!        │  Vec<Employee>
//!   source::DataSource (bundled JSON, JSON file, in-memory)
//! ```
//!
//! Data flows one way. Records are loaded once and never mutated; every user action becomes
//! an event that recomputes whatever it invalidates before returning.
//!
//! ## Layers
//!
//! - **UI layer** (the `roster` binary): parses arguments, reads the terminal width, renders
//!   [`commands::CmdResult`] as text or JSON.
//! - **API layer** ([`api`]): thin facade, input normalization, no I/O.
//! - **Command layer** ([`commands`]): shapes dashboard state into results (paging, sorting,
//!   messages).
//! - **Core** ([`dashboard`], [`facets`], [`search`], [`compose`], [`view`]): pure logic.
//!
//! Missing attributes, unknown facets and empty results are normal states, not errors. The
//! only fallible operations are loading data and configuration and parsing user input.

pub mod api;
pub mod commands;
pub mod compose;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod facets;
pub mod model;
pub mod search;
pub mod source;
pub mod view;
