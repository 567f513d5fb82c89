//! The project model boundary.
//!
//! The resolver only talks to a project through [`ProjectModel`], so it can be
//! driven against the in-memory [`Project`](crate::Project) or any test double.

use libdecl_foundation::{LibraryKind, PolicyId, PolicyStatus};

use crate::target::TargetRef;

/// Lookups and registrations the resolver needs from a project.
pub trait ProjectModel {
    /// Returns the value of a definition visible in the current scope.
    fn definition(&self, key: &str) -> Option<&str>;

    /// Returns the status the current scope records for a policy.
    fn policy_status(&self, policy: PolicyId) -> PolicyStatus;

    /// Finds a target visible from the current scope.
    ///
    /// When `resolve_aliases` is true an alias name yields the aliased target.
    fn find_target_to_use(&self, name: &str, resolve_aliases: bool) -> Option<TargetRef>;

    /// Returns true if `name` is a registered alias.
    fn is_alias(&self, name: &str) -> bool;

    /// Registers `name` as an alias of `target`.
    fn add_alias(&mut self, name: &str, target: &TargetRef);

    /// Registers an imported placeholder, project-wide if `global`.
    fn add_imported_target(&mut self, name: &str, kind: LibraryKind, global: bool);

    /// Registers a concrete library.
    fn add_library(
        &mut self,
        name: &str,
        kind: LibraryKind,
        sources: Vec<String>,
        exclude_from_all: bool,
    );

    /// Checks that no target or alias anywhere in the project uses `name`.
    ///
    /// # Errors
    ///
    /// Returns a message describing the existing owner of the name.
    fn enforce_unique_name(&self, name: &str) -> std::result::Result<(), String>;
}
