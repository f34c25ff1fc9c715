//! Facet specifications and registry.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// A filterable employee attribute.
///
/// Variant order is the order facets are presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Department,
    Position,
    Location,
    IsActive,
    Skills,
}

/// The kind of value a facet reads from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FacetKind {
    /// Single string attribute, matched by equality.
    Text,
    /// Boolean attribute, matched through its `Active` / `Inactive` label.
    Flag,
    /// List attribute, matched when any selected option is in the list.
    List,
}

/// Specification for a single facet.
#[derive(Debug, Clone, Serialize)]
pub struct FacetSpec {
    pub facet: Facet,
    /// Canonical name used by filter controls (e.g. "department", "isActive")
    pub name: &'static str,
    /// Heading shown above the facet's options
    pub label: &'static str,
    pub kind: FacetKind,
    /// Extra spellings accepted on input
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

impl FacetSpec {
    const fn new(facet: Facet, name: &'static str, label: &'static str, kind: FacetKind) -> Self {
        Self {
            facet,
            name,
            label,
            kind,
            aliases: &[],
        }
    }

    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Registry of all facets.
///
/// Adding a facet means adding a variant, an entry here, and its value accessor.
pub const FACETS: &[FacetSpec] = &[
    FacetSpec::new(Facet::Department, "department", "Department", FacetKind::Text)
        .aliases(&["dept"]),
    FacetSpec::new(Facet::Position, "position", "Position", FacetKind::Text),
    FacetSpec::new(Facet::Location, "location", "Location", FacetKind::Text),
    FacetSpec::new(Facet::IsActive, "isActive", "Active", FacetKind::Flag)
        .aliases(&["is_active", "is-active", "active", "status"]),
    FacetSpec::new(Facet::Skills, "skills", "Skills", FacetKind::List).aliases(&["skill"]),
];

/// Look up a facet spec by name or alias, ignoring ASCII case.
pub fn get_spec(name: &str) -> Option<&'static FacetSpec> {
    let name = name.trim();
    FACETS.iter().find(|spec| spec.answers_to(name))
}

impl Facet {
    pub fn spec(self) -> &'static FacetSpec {
        // FACETS lists one entry per variant, in declaration order.
        &FACETS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn kind(self) -> FacetKind {
        self.spec().kind
    }

    pub fn all() -> impl Iterator<Item = Facet> {
        FACETS.iter().map(|spec| spec.facet)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_spec(s)
            .map(|spec| spec.facet)
            .ok_or_else(|| RosterError::Api(format!("Unknown facet: {}", s.trim())))
    }
}
