//! Declaration descriptors and modifier keywords.

use std::fmt;

use libdecl_foundation::{Error, ErrorKind, LibraryKind, Result};

/// A modifier keyword recognized while scanning a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// One of the library type keywords.
    Type(LibraryKind),
    /// `ALIAS`
    Alias,
    /// `EXCLUDE_FROM_ALL`
    ExcludeFromAll,
    /// `IMPORTED`
    Imported,
    /// `GLOBAL`, only meaningful after `IMPORTED`.
    Global,
}

impl Keyword {
    /// All keywords, type keywords first.
    pub const ALL: [Self; 10] = [
        Self::Type(LibraryKind::Static),
        Self::Type(LibraryKind::Shared),
        Self::Type(LibraryKind::Module),
        Self::Type(LibraryKind::Object),
        Self::Type(LibraryKind::Unknown),
        Self::Type(LibraryKind::Interface),
        Self::Alias,
        Self::ExcludeFromAll,
        Self::Imported,
        Self::Global,
    ];

    /// Parses a token as a keyword. Matching is case-sensitive.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ALIAS" => Some(Self::Alias),
            "EXCLUDE_FROM_ALL" => Some(Self::ExcludeFromAll),
            "IMPORTED" => Some(Self::Imported),
            "GLOBAL" => Some(Self::Global),
            other => LibraryKind::from_keyword(other).map(Self::Type),
        }
    }

    /// Returns the keyword's spelling.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Type(kind) => kind.keyword(),
            Self::Alias => "ALIAS",
            Self::ExcludeFromAll => "EXCLUDE_FROM_ALL",
            Self::Imported => "IMPORTED",
            Self::Global => "GLOBAL",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The structured form of one library declaration.
///
/// Built by [`classify`](crate::classify), consumed once by the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// Target name (the first token).
    pub name: String,
    /// Explicit library type, `None` until a type keyword is accepted.
    pub kind: Option<LibraryKind>,
    /// `ALIAS` was given.
    pub is_alias: bool,
    /// `IMPORTED` was given.
    pub is_imported: bool,
    /// `GLOBAL` was given after `IMPORTED`.
    pub is_global_import: bool,
    /// `EXCLUDE_FROM_ALL` was given.
    pub exclude_from_all: bool,
    /// Tokens after modifier scanning stopped, in order.
    pub remainder: Vec<String>,
    /// Number of tokens in the declaration, name included.
    pub token_count: usize,
}

impl Descriptor {
    /// Creates an empty descriptor for a target name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            is_alias: false,
            is_imported: false,
            is_global_import: false,
            exclude_from_all: false,
            remainder: Vec::new(),
            token_count: 1,
        }
    }

    /// Returns true once a type keyword has been accepted.
    #[must_use]
    pub fn kind_explicit(&self) -> bool {
        self.kind.is_some()
    }

    /// Returns true if the declaration is an interface library.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == Some(LibraryKind::Interface)
    }

    /// Returns true if `keyword` may be consumed as a modifier now.
    ///
    /// `GLOBAL` only applies once `IMPORTED` has been seen; before that it is
    /// an ordinary token.
    #[must_use]
    pub fn applies(&self, keyword: Keyword) -> bool {
        match keyword {
            Keyword::Global => self.is_imported,
            _ => true,
        }
    }

    /// Applies a keyword, failing on the first conflict with what was already
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword conflicts with the current state.
    pub fn accept(&mut self, keyword: Keyword) -> Result<()> {
        match keyword {
            Keyword::Type(LibraryKind::Interface) => {
                if self.kind_explicit() {
                    return Err(Error::new(ErrorKind::InterfaceMultipleTypes));
                }
                if self.is_alias {
                    return Err(Error::interface_conflict(Keyword::Alias.text()));
                }
                if self.exclude_from_all {
                    return Err(Error::new(ErrorKind::InterfaceExcludeFromAll));
                }
                self.kind = Some(LibraryKind::Interface);
            }
            Keyword::Type(kind) => {
                match self.kind {
                    Some(LibraryKind::Interface) => {
                        return Err(Error::interface_conflict(kind.keyword()));
                    }
                    Some(previous) => {
                        return Err(Error::multiple_types(previous.keyword(), kind.keyword()));
                    }
                    None => {}
                }
                self.kind = Some(kind);
            }
            Keyword::Alias => {
                if self.is_interface() {
                    return Err(Error::interface_conflict(Keyword::Alias.text()));
                }
                self.is_alias = true;
            }
            Keyword::ExcludeFromAll => {
                if self.is_interface() {
                    return Err(Error::new(ErrorKind::InterfaceExcludeFromAll));
                }
                self.exclude_from_all = true;
            }
            Keyword::Imported => self.is_imported = true,
            Keyword::Global => self.is_global_import = true,
        }
        Ok(())
    }
}
