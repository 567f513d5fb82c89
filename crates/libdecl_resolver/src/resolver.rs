//! Resolution dispatch.
//!
//! A declaration is classified, checked against the name policy, and then
//! handed to exactly one of three flows:
//!
//! ```text
//! tokens ──► classify ──► policy gate ──┬─► alias flow     (ALIAS)
//!                          (non-alias,  ├─► imported flow  (IMPORTED)
//!                           non-import) └─► library flow   (otherwise)
//! ```
//!
//! A structural failure returns `Err` before any registration. The two
//! fatal-diagnostic cases (`OBJECT` imports, non-imported `UNKNOWN`) return
//! `Ok(Resolution::NotRegistered { .. })`.

use std::fmt;

use libdecl_foundation::{DiagnosticSink, LibraryKind, Result, Severity};
use libdecl_project::{NameValidator, ProjectModel};
use tracing::{debug, debug_span};

use crate::classify::classify;
use crate::config::ResolverConfig;
use crate::{alias, imported, library, policy};

/// Everything a resolution may read or change.
///
/// Passed explicitly so a resolver never reaches for process-wide state.
pub struct Context<'a> {
    /// The project receiving registrations.
    pub project: &'a mut dyn ProjectModel,
    /// Target name checks.
    pub names: &'a dyn NameValidator,
    /// Diagnostic channel.
    pub diagnostics: &'a mut dyn DiagnosticSink,
}

impl<'a> Context<'a> {
    /// Creates a context.
    pub fn new(
        project: &'a mut dyn ProjectModel,
        names: &'a dyn NameValidator,
        diagnostics: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            project,
            names,
            diagnostics,
        }
    }

    /// Emits a diagnostic.
    pub fn emit(&mut self, severity: Severity, message: impl Into<String>) {
        self.diagnostics.emit(severity, message.into());
    }
}

/// What a successful resolution did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// An alias was registered.
    Alias {
        /// The alias name.
        name: String,
        /// The real name of the aliased target.
        target: String,
    },
    /// An imported placeholder was registered.
    Imported {
        /// Target name.
        name: String,
        /// Library kind.
        kind: LibraryKind,
        /// Visible project-wide.
        global: bool,
    },
    /// A concrete library was registered.
    Library {
        /// Target name.
        name: String,
        /// Final library kind, after defaulting and downgrade.
        kind: LibraryKind,
    },
    /// A fatal diagnostic was emitted and nothing was registered, but the
    /// declaration does not fail.
    NotRegistered {
        /// Target name.
        name: String,
        /// The kind that could not be registered.
        kind: LibraryKind,
    },
}

impl Resolution {
    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Alias { name, .. }
            | Self::Imported { name, .. }
            | Self::Library { name, .. }
            | Self::NotRegistered { name, .. } => name,
        }
    }

    /// Returns true if something was added to the project.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        !matches!(self, Self::NotRegistered { .. })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alias { name, target } => write!(f, "alias {name} -> {target}"),
            Self::Imported { name, kind, global } => {
                write!(f, "imported {kind} library {name}")?;
                if *global {
                    write!(f, " (global)")?;
                }
                Ok(())
            }
            Self::Library { name, kind } => write!(f, "{kind} library {name}"),
            Self::NotRegistered { name, kind } => {
                write!(f, "{kind} library {name} not registered")
            }
        }
    }
}

/// Resolves library declarations into project registrations.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves one declaration. Token 0 is the target name.
    ///
    /// # Errors
    ///
    /// Returns the structural failure of the declaration, if any. Nothing is
    /// registered when an error is returned.
    pub fn resolve<S: AsRef<str>>(&self, ctx: &mut Context<'_>, tokens: &[S]) -> Result<Resolution> {
        let name = tokens.first().map_or("", |t| t.as_ref());
        let span = debug_span!("add_library", %name);
        let _guard = span.enter();

        let descriptor = classify(tokens)?;
        debug!(
            kind = ?descriptor.kind,
            alias = descriptor.is_alias,
            imported = descriptor.is_imported,
            global = descriptor.is_global_import,
            exclude_from_all = descriptor.exclude_from_all,
            remainder = descriptor.remainder.len(),
            "classified declaration"
        );

        if descriptor.is_alias {
            return alias::resolve(ctx, descriptor);
        }
        if descriptor.is_imported {
            return imported::resolve(ctx, descriptor);
        }
        policy::check_target_name(&self.config, ctx, &descriptor)?;
        library::resolve(&self.config, ctx, descriptor)
    }
}
