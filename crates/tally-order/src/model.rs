//! Core data types for the ordering engine.
//!
//! Items are ordered within a **scope**: the set of siblings that share a
//! parent, a category kind, and an archive flag. Positions are `f64` sort
//! keys — ascending position within a scope reproduces the user-intended
//! order. Position values are never required to be unique across scopes,
//! only strictly ordered within one.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The two kinds of category in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(ParseKindError {
                got: other.to_string(),
            }),
        }
    }
}

/// Error returned when parsing a [`CategoryKind`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    pub got: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid category kind: '{}'", self.got)
    }
}

impl std::error::Error for ParseKindError {}

/// Identifies the sibling group an item is ordered within.
///
/// Two items are siblings iff their scope keys are equal. Scope membership
/// is resolved by the caller (the query layer filters on exactly these
/// fields); this crate only uses the key to sanity-check its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey {
    /// Parent category, if nested. Top-level categories have `None`.
    pub parent_id: Option<String>,
    pub kind: CategoryKind,
    pub archived: bool,
}

impl ScopeKey {
    /// A top-level (unparented, unarchived) scope of the given kind.
    pub const fn root(kind: CategoryKind) -> Self {
        Self {
            parent_id: None,
            kind,
            archived: false,
        }
    }

    /// The child scope under `parent_id`, same kind, unarchived.
    pub fn under(parent_id: &str, kind: CategoryKind) -> Self {
        Self {
            parent_id: Some(parent_id.to_string()),
            kind,
            archived: false,
        }
    }
}

/// A category as seen by the interactive reorder path.
///
/// The caller supplies scope items pre-filtered to one [`ScopeKey`] and
/// pre-sorted ascending by `position`. Parent links live on the scope key;
/// only the bulk-import path ([`ImportItem`]) walks them per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    pub id: String,
    pub scope: ScopeKey,
    /// Sort key. Strictly ordered within a scope, not necessarily
    /// contiguous or globally unique.
    pub position: f64,
}

impl OrderedItem {
    pub fn new(id: &str, scope: ScopeKey, position: f64) -> Self {
        Self {
            id: id.to_string(),
            scope,
            position,
        }
    }
}

/// One intended position write, handed to the persistence collaborator.
///
/// A multi-pair set (from a rebalance) must be persisted atomically so no
/// reader observes a partially renumbered scope. A single pair only needs
/// ordinary write durability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: String,
    pub position: f64,
}

/// A bulk-import row: id and optional parent reference, no position yet.
///
/// Rows arrive from an export payload that has already passed shape/type
/// and single-level-nesting validation upstream; cycle detection is the
/// one structural check this crate re-performs itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportItem {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Display name, used to make cycle errors actionable when present.
    #[serde(default)]
    pub name: Option<String>,
}

impl ImportItem {
    pub fn root(id: &str) -> Self {
        Self {
            id: id.to_string(),
            parent_id: None,
            name: None,
        }
    }

    pub fn child(id: &str, parent_id: &str) -> Self {
        Self {
            id: id.to_string(),
            parent_id: Some(parent_id.to_string()),
            name: None,
        }
    }
}

/// A bulk-import row after position assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedItem {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub position: f64,
}
