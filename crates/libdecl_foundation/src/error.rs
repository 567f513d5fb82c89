//! Error types for declaration resolution.
//!
//! Uses `thiserror` for ergonomic error definition. Each structural failure of
//! a declaration is one [`ErrorKind`] variant whose `Display` output is the
//! single human-readable message handed back to the enclosing evaluator.

use std::fmt;

use thiserror::Error;

/// The main error type for libdecl operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a conflict error for a keyword that follows `INTERFACE`.
    #[must_use]
    pub fn interface_conflict(keyword: &'static str) -> Self {
        Self::new(ErrorKind::InterfaceTypeConflict(keyword))
    }

    /// Creates a conflict error for a second explicit type keyword.
    #[must_use]
    pub fn multiple_types(first: &'static str, second: &'static str) -> Self {
        Self::new(ErrorKind::MultipleTypes { first, second })
    }

    /// Creates a name uniqueness failure carrying the project's message.
    #[must_use]
    pub fn duplicate_target(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateTarget(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error is a structural failure of a declaration,
    /// as opposed to a script, I/O, or internal failure.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::ScriptSyntax { .. }
                | ErrorKind::UnknownCommand(_)
                | ErrorKind::CommandUsage { .. }
                | ErrorKind::Io(_)
                | ErrorKind::Serialization(_)
                | ErrorKind::Internal(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The declaration had no tokens at all.
    #[error("called with incorrect number of arguments")]
    MissingTargetName,

    /// A concrete type keyword or `ALIAS` appeared after `INTERFACE`.
    #[error("INTERFACE library specified with conflicting {0} type.")]
    InterfaceTypeConflict(&'static str),

    /// `INTERFACE` appeared after another explicit type keyword.
    #[error("INTERFACE library specified with conflicting/multiple types.")]
    InterfaceMultipleTypes,

    /// Two concrete type keywords in one declaration.
    #[error("library specified with conflicting/multiple types: {first} and {second}.")]
    MultipleTypes {
        /// The type keyword accepted first.
        first: &'static str,
        /// The conflicting type keyword.
        second: &'static str,
    },

    /// `INTERFACE` combined with `EXCLUDE_FROM_ALL`, in either order.
    #[error("INTERFACE library may not be used with EXCLUDE_FROM_ALL.")]
    InterfaceExcludeFromAll,

    /// `INTERFACE` followed by trailing tokens.
    #[error("INTERFACE library requires no source arguments.")]
    InterfaceWithSources,

    /// The name policy rejected a reserved or invalid target name.
    #[error(
        "The target name \"{0}\" is reserved or not valid for certain build features, \
         such as generator expressions, and may result in undefined behavior."
    )]
    ReservedTargetName(String),

    /// The alias name failed the name syntax check.
    #[error("Invalid name for ALIAS: {0}")]
    InvalidAliasName(String),

    /// `ALIAS` combined with `EXCLUDE_FROM_ALL`.
    #[error("EXCLUDE_FROM_ALL with ALIAS makes no sense.")]
    AliasExcludeFromAll,

    /// `ALIAS` combined with `IMPORTED` or `GLOBAL`.
    #[error("IMPORTED with ALIAS is not allowed.")]
    AliasImported,

    /// `ALIAS` without exactly one target reference.
    #[error("ALIAS requires exactly one target argument.")]
    AliasArity,

    /// The aliased name is itself an alias.
    #[error("cannot create ALIAS target \"{alias}\" because target \"{target}\" is itself an ALIAS.")]
    AliasOfAlias {
        /// The alias being declared.
        alias: String,
        /// The referenced name.
        target: String,
    },

    /// The aliased target does not exist.
    #[error(
        "cannot create ALIAS target \"{alias}\" because target \"{target}\" does not already exist."
    )]
    AliasTargetMissing {
        /// The alias being declared.
        alias: String,
        /// The referenced name.
        target: String,
    },

    /// The aliased target is not a library.
    #[error("cannot create ALIAS target \"{alias}\" because target \"{target}\" is not a library.")]
    AliasTargetNotLibrary {
        /// The alias being declared.
        alias: String,
        /// The referenced name.
        target: String,
    },

    /// The aliased target is an imported placeholder.
    #[error("cannot create ALIAS target \"{alias}\" because target \"{target}\" is IMPORTED.")]
    AliasTargetImported {
        /// The alias being declared.
        alias: String,
        /// The referenced name.
        target: String,
    },

    /// `IMPORTED` combined with `EXCLUDE_FROM_ALL`.
    #[error("EXCLUDE_FROM_ALL with IMPORTED target makes no sense.")]
    ImportedExcludeFromAll,

    /// `IMPORTED` without an explicit type keyword.
    #[error("called with IMPORTED argument but no library type specified.")]
    ImportedWithoutType,

    /// An imported interface library with an invalid name.
    #[error("Invalid name for IMPORTED INTERFACE library target: {0}")]
    InvalidImportedInterfaceName(String),

    /// An imported target whose name is already taken.
    #[error(
        "cannot create imported target \"{0}\" because another target with the same name already exists."
    )]
    ImportedNameCollision(String),

    /// The project refused the name as not unique.
    #[error("{0}")]
    DuplicateTarget(String),

    /// A concrete interface library with an invalid name.
    #[error("Invalid name for INTERFACE library target: {0}")]
    InvalidInterfaceName(String),

    /// Malformed script text.
    #[error("syntax error at line {line}: {message}")]
    ScriptSyntax {
        /// Description of the problem.
        message: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// A script command the session does not know.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A known script command with bad arguments.
    #[error("{command} {message}")]
    CommandUsage {
        /// The command name.
        command: String,
        /// What was wrong.
        message: String,
    },

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Snapshot encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The command being evaluated.
    pub command: Option<String>,
    /// Script path or other source label.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command name.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
            wrote = true;
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
            wrote = true;
        }
        if let Some(command) = &self.command {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "in {command}()")?;
        }
        Ok(())
    }
}
