//! Concrete library declarations, the default flow.

use libdecl_foundation::{Error, ErrorKind, LibraryKind, Result, Severity, is_off, is_on};
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::descriptor::Descriptor;
use crate::resolver::{Context, Resolution};

/// Picks the kind for a declaration without a type keyword.
#[must_use]
pub fn default_kind(config: &ResolverConfig, ctx: &Context<'_>) -> LibraryKind {
    if is_off(ctx.project.definition(&config.prefer_shared_key)) {
        LibraryKind::Static
    } else {
        LibraryKind::Shared
    }
}

/// Registers a concrete library built by this project.
///
/// An `UNKNOWN` library reports a fatal diagnostic but still returns success,
/// with nothing registered.
///
/// # Errors
///
/// Returns an error if the name is taken anywhere in the project, or if an
/// interface library has an invalid or namespaced name.
pub fn resolve(
    config: &ResolverConfig,
    ctx: &mut Context<'_>,
    descriptor: Descriptor,
) -> Result<Resolution> {
    let mut kind = match descriptor.kind {
        Some(kind) => kind,
        None => default_kind(config, ctx),
    };
    let Descriptor {
        name,
        exclude_from_all,
        remainder: sources,
        ..
    } = descriptor;

    ctx.project
        .enforce_unique_name(&name)
        .map_err(Error::duplicate_target)?;

    if kind == LibraryKind::Interface {
        if !ctx.names.is_valid_target_name(&name) || name.contains(&config.namespace_separator) {
            return Err(Error::new(ErrorKind::InvalidInterfaceName(name)));
        }
        debug!(%name, "adding interface library");
        ctx.project
            .add_library(&name, kind, Vec::new(), exclude_from_all);
        return Ok(Resolution::Library { name, kind });
    }

    if kind.is_dynamic() && !is_on(ctx.project.definition(&config.dynamic_linking_key)) {
        warn!(%name, requested = %kind, "no dynamic linking, building static");
        ctx.emit(
            Severity::AuthorWarning,
            format!(
                "add_library called with {kind} option but the target platform does not \
                 support dynamic linking. Building a STATIC library instead. This may lead \
                 to problems."
            ),
        );
        kind = LibraryKind::Static;
    }

    if kind == LibraryKind::Unknown {
        ctx.emit(
            Severity::FatalError,
            "The UNKNOWN library type may be used only for IMPORTED libraries.",
        );
        return Ok(Resolution::NotRegistered { name, kind });
    }

    if sources.is_empty() {
        ctx.emit(
            Severity::Warning,
            format!(
                "You have called add_library for library {name} without any source files. \
                 This typically indicates a problem with your build description."
            ),
        );
    }

    debug!(%name, %kind, sources = sources.len(), exclude_from_all, "adding library");
    ctx.project.add_library(&name, kind, sources, exclude_from_all);
    Ok(Resolution::Library { name, kind })
}
