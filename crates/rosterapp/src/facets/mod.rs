//! # Facet System
//!
//! A facet is a named employee attribute with a finite set of selectable options. The
//! dashboard derives option lists from the roster once and lets the user narrow the visible
//! set by ticking options.
//!
//! The module is split the same way for every facet instead of special-casing each one:
//!
//! - **Registry** ([`FACETS`]): which attributes are filterable, under what names, and what
//!   kind of value they hold.
//! - **Values** ([`FacetValue`]): uniform read access to a record's value for a facet.
//! - **Derivation** ([`derive_facets`]): distinct option lists computed from the full roster.
//! - **Selection** ([`FilterSelection`]): the immutable multi-select state and its predicate.
//!
//! ## Facet Kinds
//!
//! | Kind | Facets | Option source | Match rule |
//! |------|--------|---------------|------------|
//! | `Text` | `department`, `position`, `location` | distinct values | exact equality |
//! | `Flag` | `isActive` | fixed `Active` / `Inactive` | label of the boolean |
//! | `List` | `skills` | union of every skill list | non-empty intersection |
//!
//! ## Combination
//!
//! Options selected within one facet are OR-combined; facets are AND-combined; a facet with
//! nothing selected does not restrict anything.

mod derive;
mod selection;
mod spec;
mod value;

pub use derive::{derive_facets, FacetOptions};
pub use selection::FilterSelection;
pub use spec::{get_spec, Facet, FacetKind, FacetSpec, FACETS};
pub use value::FacetValue;
