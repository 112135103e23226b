//! Typed name definitions for cluster resources.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::define_name;
use crate::NameError;

// =============================================================================
// Name Kinds
// =============================================================================

/// The kind of resource a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Index,
    Alias,
}

impl NameKind {
    /// Returns the lowercase label used in messages and output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NameKind::Index => "index",
            NameKind::Alias => "alias",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Index and Alias Names
// =============================================================================

define_name!(
    /// Name of an index, used as the first path segment of index requests.
    IndexName,
    NameKind::Index
);

define_name!(
    /// Name of an alias pointing at one or more indices.
    AliasName,
    NameKind::Alias
);

// =============================================================================
// Dynamically Kinded Names
// =============================================================================

/// A name whose kind is only known at runtime.
///
/// Names of the same kind compare by their string value. Names of different
/// kinds are unordered: `partial_cmp` returns `None` and [`ResourceName::try_cmp`]
/// returns [`NameError::IncompatibleComparison`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceName {
    Index(IndexName),
    Alias(AliasName),
}

impl ResourceName {
    /// Parses and validates a name of the given kind.
    pub fn parse(kind: NameKind, s: &str) -> Result<Self, NameError> {
        match kind {
            NameKind::Index => IndexName::parse(s).map(Self::Index),
            NameKind::Alias => AliasName::parse(s).map(Self::Alias),
        }
    }

    pub fn kind(&self) -> NameKind {
        match self {
            ResourceName::Index(_) => NameKind::Index,
            ResourceName::Alias(_) => NameKind::Alias,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResourceName::Index(name) => name.as_str(),
            ResourceName::Alias(name) => name.as_str(),
        }
    }

    /// Compares two names of the same kind.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, NameError> {
        match (self, other) {
            (ResourceName::Index(a), ResourceName::Index(b)) => Ok(a.cmp(b)),
            (ResourceName::Alias(a), ResourceName::Alias(b)) => Ok(a.cmp(b)),
            _ => Err(NameError::IncompatibleComparison {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl PartialOrd for ResourceName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<IndexName> for ResourceName {
    fn from(name: IndexName) -> Self {
        ResourceName::Index(name)
    }
}

impl From<AliasName> for ResourceName {
    fn from(name: AliasName) -> Self {
        ResourceName::Alias(name)
    }
}

// =============================================================================
// Tests
// =============================================================================
