//! Alias declarations: `name ALIAS target`.

use libdecl_foundation::{Error, ErrorKind, Result};
use tracing::debug;

use crate::descriptor::Descriptor;
use crate::resolver::{Context, Resolution};

/// Registers `descriptor.name` as an alias of the single remainder token.
///
/// Checks run in a fixed order and the first failure wins. No target is
/// created; the project only records a reference to the existing one.
///
/// # Errors
///
/// Returns an error if the alias name is invalid, other modifiers were given,
/// the token count is not exactly three, or the referenced target is missing,
/// itself an alias, not a library, or imported.
pub fn resolve(ctx: &mut Context<'_>, descriptor: Descriptor) -> Result<Resolution> {
    let Descriptor {
        name,
        exclude_from_all,
        is_imported,
        is_global_import,
        remainder,
        token_count,
        ..
    } = descriptor;

    if !ctx.names.is_valid_target_name(&name) {
        return Err(Error::new(ErrorKind::InvalidAliasName(name)));
    }
    if exclude_from_all {
        return Err(Error::new(ErrorKind::AliasExcludeFromAll));
    }
    if is_imported || is_global_import {
        return Err(Error::new(ErrorKind::AliasImported));
    }
    let [target_name] = <[String; 1]>::try_from(remainder)
        .ok()
        .filter(|_| token_count == 3)
        .ok_or_else(|| Error::new(ErrorKind::AliasArity))?;

    if ctx.project.is_alias(&target_name) {
        return Err(Error::new(ErrorKind::AliasOfAlias {
            alias: name,
            target: target_name,
        }));
    }
    let Some(target) = ctx.project.find_target_to_use(&target_name, true) else {
        return Err(Error::new(ErrorKind::AliasTargetMissing {
            alias: name,
            target: target_name,
        }));
    };
    if !target.kind.is_aliasable_library() {
        return Err(Error::new(ErrorKind::AliasTargetNotLibrary {
            alias: name,
            target: target_name,
        }));
    }
    if target.imported {
        return Err(Error::new(ErrorKind::AliasTargetImported {
            alias: name,
            target: target_name,
        }));
    }

    debug!(alias = %name, target = %target.name, "adding alias");
    ctx.project.add_alias(&name, &target);
    Ok(Resolution::Alias {
        name,
        target: target.name,
    })
}
