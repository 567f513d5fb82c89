//! Targets and generational target identifiers.

use std::fmt;

use libdecl_foundation::TargetKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Target identifier with generational index for stale reference detection.
///
/// Aliases hold a `TargetId` rather than the target itself. When a target is
/// removed its slot generation advances, so every alias that pointed at it
/// stops resolving instead of keeping the target alive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetId {
    /// Index into target storage.
    pub index: u32,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl TargetId {
    /// Creates a new target ID with the given index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetId({}v{})", self.index, self.generation)
    }
}

/// Identifier of a directory scope within a project.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// The top-level scope every project starts in.
    pub const ROOT: Self = Self(0);
}

/// A target registered in a project.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    /// Target name.
    pub name: String,
    /// What the target builds.
    pub kind: TargetKind,
    /// True for placeholders of artifacts built elsewhere.
    pub imported: bool,
    /// True for imported targets visible project-wide.
    pub global: bool,
    /// Source files, in declaration order.
    pub sources: Vec<String>,
    /// True if the target is left out of the default build.
    pub exclude_from_all: bool,
    /// Scope the target was declared in.
    pub scope: ScopeId,
}

impl Target {
    /// Creates a concrete (non-imported) target.
    #[must_use]
    pub fn concrete(name: impl Into<String>, kind: TargetKind, scope: ScopeId) -> Self {
        Self {
            name: name.into(),
            kind,
            imported: false,
            global: false,
            sources: Vec::new(),
            exclude_from_all: false,
            scope,
        }
    }

    /// Creates an imported placeholder.
    #[must_use]
    pub fn imported(name: impl Into<String>, kind: TargetKind, global: bool, scope: ScopeId) -> Self {
        Self {
            name: name.into(),
            kind,
            imported: true,
            global,
            sources: Vec::new(),
            exclude_from_all: false,
            scope,
        }
    }

    /// Sets the sources.
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Sets the exclude-from-all flag.
    #[must_use]
    pub fn with_exclude_from_all(mut self, exclude: bool) -> Self {
        self.exclude_from_all = exclude;
        self
    }
}

/// A lightweight handle to a target found by a lookup.
///
/// Carries what the resolver needs to judge the target without borrowing the
/// project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetRef {
    /// Identity of the target.
    pub id: TargetId,
    /// Target name (the real name, not an alias).
    pub name: String,
    /// What the target builds.
    pub kind: TargetKind,
    /// True for imported placeholders.
    pub imported: bool,
    /// True for imported targets visible project-wide.
    pub global: bool,
}

impl TargetRef {
    /// Builds a handle from a stored target.
    #[must_use]
    pub fn from_target(id: TargetId, target: &Target) -> Self {
        Self {
            id,
            name: target.name.clone(),
            kind: target.kind,
            imported: target.imported,
            global: target.global,
        }
    }
}
