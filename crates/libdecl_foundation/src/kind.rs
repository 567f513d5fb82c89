//! Library and target kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of library a declaration asks for.
///
/// A declaration with no type keyword has no `LibraryKind` yet; the resolver
/// picks one later from the project's defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LibraryKind {
    /// Archive of object files linked into consumers.
    Static,
    /// Dynamically linked library.
    Shared,
    /// Plugin loaded at runtime, never linked.
    Module,
    /// Collection of object files without an archive.
    Object,
    /// Usage requirements only, no build artifact.
    Interface,
    /// Pre-built library of unknown linkage (imports only).
    Unknown,
}

impl LibraryKind {
    /// All library kinds, in keyword order.
    pub const ALL: [Self; 6] = [
        Self::Static,
        Self::Shared,
        Self::Module,
        Self::Object,
        Self::Interface,
        Self::Unknown,
    ];

    /// Returns the declaration keyword for this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Static => "STATIC",
            Self::Shared => "SHARED",
            Self::Module => "MODULE",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Looks up a kind by its declaration keyword (case-sensitive).
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == word)
    }

    /// Returns true for kinds that need dynamic linking support.
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::Shared | Self::Module)
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The kind of a target registered in the project model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetKind {
    /// An executable program.
    Executable,
    /// A static library.
    StaticLibrary,
    /// A shared library.
    SharedLibrary,
    /// A module library.
    ModuleLibrary,
    /// An object library.
    ObjectLibrary,
    /// An interface library.
    InterfaceLibrary,
    /// An imported library of unknown linkage.
    UnknownLibrary,
    /// A target that runs commands and produces no artifact.
    Utility,
}

impl TargetKind {
    /// Returns true if an alias may refer to a target of this kind.
    ///
    /// Executables, utilities and unknown-linkage libraries are ineligible.
    #[must_use]
    pub const fn is_aliasable_library(self) -> bool {
        matches!(
            self,
            Self::StaticLibrary
                | Self::SharedLibrary
                | Self::ModuleLibrary
                | Self::ObjectLibrary
                | Self::InterfaceLibrary
        )
    }

    /// Returns the library kind, if this target is a library.
    #[must_use]
    pub const fn library_kind(self) -> Option<LibraryKind> {
        match self {
            Self::StaticLibrary => Some(LibraryKind::Static),
            Self::SharedLibrary => Some(LibraryKind::Shared),
            Self::ModuleLibrary => Some(LibraryKind::Module),
            Self::ObjectLibrary => Some(LibraryKind::Object),
            Self::InterfaceLibrary => Some(LibraryKind::Interface),
            Self::UnknownLibrary => Some(LibraryKind::Unknown),
            Self::Executable | Self::Utility => None,
        }
    }

    /// Human-readable description, as used in duplicate-name messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Executable => "executable",
            Self::StaticLibrary => "static library",
            Self::SharedLibrary => "shared library",
            Self::ModuleLibrary => "module library",
            Self::ObjectLibrary => "object library",
            Self::InterfaceLibrary => "interface library",
            Self::UnknownLibrary => "unknown library",
            Self::Utility => "utility target",
        }
    }
}

impl From<LibraryKind> for TargetKind {
    fn from(kind: LibraryKind) -> Self {
        match kind {
            LibraryKind::Static => Self::StaticLibrary,
            LibraryKind::Shared => Self::SharedLibrary,
            LibraryKind::Module => Self::ModuleLibrary,
            LibraryKind::Object => Self::ObjectLibrary,
            LibraryKind::Interface => Self::InterfaceLibrary,
            LibraryKind::Unknown => Self::UnknownLibrary,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
