//! Imported target declarations: `name <TYPE> IMPORTED [GLOBAL]`.

use libdecl_foundation::{Error, ErrorKind, LibraryKind, Result, Severity};
use tracing::{debug, trace};

use crate::descriptor::Descriptor;
use crate::resolver::{Context, Resolution};

/// Registers an imported placeholder for a library built elsewhere.
///
/// An `OBJECT` import reports a fatal diagnostic but still returns success,
/// with nothing registered.
///
/// # Errors
///
/// Returns an error if `EXCLUDE_FROM_ALL` was given, no type keyword was
/// given, an imported interface library has an invalid name, or the name is
/// already used by a visible target.
pub fn resolve(ctx: &mut Context<'_>, descriptor: Descriptor) -> Result<Resolution> {
    if descriptor.exclude_from_all {
        return Err(Error::new(ErrorKind::ImportedExcludeFromAll));
    }
    let Some(kind) = descriptor.kind else {
        return Err(Error::new(ErrorKind::ImportedWithoutType));
    };
    let name = descriptor.name;

    if kind == LibraryKind::Object {
        ctx.emit(
            Severity::FatalError,
            "The OBJECT library type may not be used for IMPORTED libraries.",
        );
        return Ok(Resolution::NotRegistered { name, kind });
    }
    if kind == LibraryKind::Interface && !ctx.names.is_valid_target_name(&name) {
        return Err(Error::new(ErrorKind::InvalidImportedInterfaceName(name)));
    }
    if ctx.project.find_target_to_use(&name, true).is_some() {
        return Err(Error::new(ErrorKind::ImportedNameCollision(name)));
    }

    if !descriptor.remainder.is_empty() {
        trace!(ignored = descriptor.remainder.len(), "imported target ignores trailing tokens");
    }

    let global = descriptor.is_global_import;
    debug!(%name, %kind, global, "adding imported target");
    ctx.project.add_imported_target(&name, kind, global);
    Ok(Resolution::Imported { name, kind, global })
}
