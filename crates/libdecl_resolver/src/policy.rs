//! The target name policy gate.
//!
//! Names that fail the validator are judged by a compatibility policy. The
//! five raw policy states collapse into three behaviors:
//!
//! | Raw status                          | Level            |
//! |-------------------------------------|------------------|
//! | `OLD`                               | `Silent`         |
//! | `WARN`                              | `WarnThenPermit` |
//! | `NEW`, `REQUIRED_IF_USED`, `REQUIRED_ALWAYS` | `Reject` |

use libdecl_foundation::{Error, ErrorKind, PolicyStatus, Result, Severity};
use libdecl_project::NameValidator;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::descriptor::Descriptor;
use crate::resolver::Context;

/// What the gate does with a name that fails validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyLevel {
    /// Permit without comment.
    Silent,
    /// Permit with an author warning, except for interface libraries.
    WarnThenPermit,
    /// Emit a fatal diagnostic and fail the declaration.
    Reject,
}

const LEVELS: [(PolicyStatus, PolicyLevel); 5] = [
    (PolicyStatus::Old, PolicyLevel::Silent),
    (PolicyStatus::Warn, PolicyLevel::WarnThenPermit),
    (PolicyStatus::New, PolicyLevel::Reject),
    (PolicyStatus::RequiredIfUsed, PolicyLevel::Reject),
    (PolicyStatus::RequiredAlways, PolicyLevel::Reject),
];

impl PolicyLevel {
    /// Looks up the level for a raw policy status.
    #[must_use]
    pub fn for_status(status: PolicyStatus) -> Self {
        LEVELS
            .iter()
            .find(|(raw, _)| *raw == status)
            .map_or(Self::Reject, |(_, level)| *level)
    }
}

/// Returns true if the name passes every check the policy guards: valid
/// syntax, not reserved, and no `:` (colons are for namespaced and imported
/// names).
///
/// The colon test is fixed and independent of
/// [`ResolverConfig::namespace_separator`], which only governs interface
/// library names. Keep the two separate.
#[must_use]
pub fn name_is_acceptable(names: &dyn NameValidator, name: &str) -> bool {
    names.is_valid_target_name(name) && !names.is_reserved_target(name) && !name.contains(':')
}

/// Runs the policy gate for a non-alias, non-imported declaration.
///
/// # Errors
///
/// Returns an error if the name is unacceptable and the policy rejects it.
pub fn check_target_name(
    config: &ResolverConfig,
    ctx: &mut Context<'_>,
    descriptor: &Descriptor,
) -> Result<()> {
    if name_is_acceptable(ctx.names, &descriptor.name) {
        return Ok(());
    }

    let policy = config.name_policy;
    let level = PolicyLevel::for_status(ctx.project.policy_status(policy));
    debug!(name = %descriptor.name, %policy, ?level, "target name failed validation");

    let message = || {
        format!(
            "{}\n{}",
            policy.warning_text(),
            ErrorKind::ReservedTargetName(descriptor.name.clone())
        )
    };

    match level {
        PolicyLevel::Silent => Ok(()),
        PolicyLevel::WarnThenPermit => {
            if !descriptor.is_interface() {
                ctx.emit(Severity::AuthorWarning, message());
            }
            Ok(())
        }
        PolicyLevel::Reject => {
            ctx.emit(Severity::FatalError, message());
            Err(Error::new(ErrorKind::ReservedTargetName(
                descriptor.name.clone(),
            )))
        }
    }
}
