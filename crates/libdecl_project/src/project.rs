//! In-memory project model with directory scopes.
//!
//! The `Project` is the reference implementation of [`ProjectModel`]. It uses
//! persistent maps so that cloning a project for a snapshot shares structure
//! with the original.
//!
//! Visibility rules:
//! - Concrete targets and aliases are project-wide.
//! - Imported targets are visible in the scope that declared them, unless they
//!   were declared global.
//! - A new target's name must not be taken in any scope, including by a
//!   scoped import that is not visible from the current one.
//! - Definitions and policies are copied into a child scope when it is entered.

use im::OrdMap;
use libdecl_foundation::{LibraryKind, PolicyId, PolicyStatus, TargetKind, is_on};
use tracing::{debug, trace};

use crate::config::{ProjectConfig, keys};
use crate::model::ProjectModel;
use crate::store::TargetStore;
use crate::target::{ScopeId, Target, TargetId, TargetRef};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directory scope.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scope {
    /// Directory name.
    pub name: String,
    /// Enclosing scope, `None` for the top level.
    pub parent: Option<ScopeId>,
    definitions: OrdMap<String, String>,
    policies: OrdMap<PolicyId, PolicyStatus>,
    /// Non-global imported targets declared here.
    imported: OrdMap<String, TargetId>,
}

impl Scope {
    fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            definitions: OrdMap::new(),
            policies: OrdMap::new(),
            imported: OrdMap::new(),
        }
    }

    fn child_of(parent_id: ScopeId, parent: &Scope, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent_id),
            definitions: parent.definitions.clone(),
            policies: parent.policies.clone(),
            imported: OrdMap::new(),
        }
    }
}

/// An in-memory project.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Project {
    targets: TargetStore,
    /// Concrete targets and global imports, by name.
    global_names: OrdMap<String, TargetId>,
    /// Alias name to aliased target. Never owns the target.
    aliases: OrdMap<String, TargetId>,
    scopes: Vec<Scope>,
    current: ScopeId,
    default_policy_status: PolicyStatus,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    /// Creates a project with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ProjectConfig::default())
    }

    /// Creates a project seeded from a configuration.
    #[must_use]
    pub fn with_config(config: &ProjectConfig) -> Self {
        let mut root = Scope::root("");
        root.definitions.insert(
            keys::TARGET_SUPPORTS_SHARED_LIBS.to_string(),
            if config.supports_dynamic_linking {
                "TRUE"
            } else {
                "FALSE"
            }
            .to_string(),
        );
        for (key, value) in &config.definitions {
            root.definitions.insert(key.clone(), value.clone());
        }
        for (policy, status) in &config.policies {
            root.policies.insert(*policy, *status);
        }

        Self {
            targets: TargetStore::new(),
            global_names: OrdMap::new(),
            aliases: OrdMap::new(),
            scopes: vec![root],
            current: ScopeId::ROOT,
            default_policy_status: config.default_policy_status,
        }
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    /// Returns the current scope.
    #[must_use]
    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// Returns a scope by id.
    #[must_use]
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0 as usize)
    }

    fn scope_ref(&self) -> &Scope {
        &self.scopes[self.current.0 as usize]
    }

    fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scopes[self.current.0 as usize]
    }

    /// Enters a new child scope of the current one and makes it current.
    #[allow(clippy::cast_possible_truncation)]
    pub fn enter_scope(&mut self, name: impl Into<String>) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        let child = Scope::child_of(self.current, self.scope_ref(), name);
        debug!(scope = %child.name, id = id.0, "entering scope");
        self.scopes.push(child);
        self.current = id;
        id
    }

    /// Returns to the parent of the current scope.
    ///
    /// Returns `None` if already at the top level.
    pub fn exit_scope(&mut self) -> Option<ScopeId> {
        let parent = self.scope_ref().parent?;
        debug!(from = self.current.0, to = parent.0, "leaving scope");
        self.current = parent;
        Some(parent)
    }

    // =========================================================================
    // Definitions and policies
    // =========================================================================

    /// Sets a definition in the current scope.
    pub fn set_definition(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.scope_mut().definitions.insert(key.into(), value.into());
    }

    /// Removes a definition from the current scope.
    pub fn unset_definition(&mut self, key: &str) {
        self.scope_mut().definitions.remove(key);
    }

    /// Sets a policy in the current scope.
    pub fn set_policy(&mut self, policy: PolicyId, status: PolicyStatus) {
        self.scope_mut().policies.insert(policy, status);
    }

    /// Returns true if the platform supports dynamic linking.
    #[must_use]
    pub fn supports_dynamic_linking(&self) -> bool {
        is_on(self.definition(keys::TARGET_SUPPORTS_SHARED_LIBS))
    }

    // =========================================================================
    // Targets
    // =========================================================================

    /// Registers an executable.
    ///
    /// No uniqueness check is made; callers check with
    /// [`ProjectModel::enforce_unique_name`] first.
    pub fn add_executable(&mut self, name: &str, sources: Vec<String>) -> TargetId {
        let target =
            Target::concrete(name, TargetKind::Executable, self.current).with_sources(sources);
        self.insert_global(target)
    }

    fn insert_global(&mut self, target: Target) -> TargetId {
        let name = target.name.clone();
        let id = self.targets.insert(target);
        trace!(%name, ?id, "registered project-wide target");
        self.global_names.insert(name, id);
        id
    }

    /// Removes a target by name.
    ///
    /// Aliases of the removed target are left in place but no longer resolve.
    pub fn remove_target(&mut self, name: &str) -> Option<Target> {
        let id = match self.global_names.remove(name) {
            Some(id) => id,
            None => self.scope_mut().imported.remove(name)?,
        };
        debug!(%name, ?id, "removing target");
        self.targets.remove(id)
    }

    /// Returns the target visible under `name`, not following aliases.
    #[must_use]
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.lookup_id(name).and_then(|id| self.targets.get(id))
    }

    /// Returns the target an alias refers to, if the alias exists and the
    /// target is still alive.
    #[must_use]
    pub fn alias_target(&self, alias: &str) -> Option<&Target> {
        self.aliases.get(alias).and_then(|id| self.targets.get(*id))
    }

    /// Iterates over all live targets.
    pub fn targets(&self) -> impl Iterator<Item = &Target> + '_ {
        self.targets.iter().map(|(_, target)| target)
    }

    /// Iterates over alias names.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.aliases.keys().map(String::as_str)
    }

    /// Returns the number of live targets.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Checks the structural invariants a decoded project must satisfy.
    ///
    /// Every scope other than the first needs a parent declared before it, and
    /// the current scope must exist.
    ///
    /// # Errors
    ///
    /// Returns a description of the first broken invariant.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.scopes.is_empty() {
            return Err("project has no scopes".to_string());
        }
        if self.scope(self.current).is_none() {
            return Err(format!("current scope {} does not exist", self.current.0));
        }
        for (index, scope) in self.scopes.iter().enumerate() {
            match scope.parent {
                None if index == 0 => {}
                None => return Err(format!("scope {index} has no parent")),
                Some(parent) if (parent.0 as usize) < index => {}
                Some(parent) => {
                    return Err(format!(
                        "scope {index} has parent {} declared after it",
                        parent.0
                    ));
                }
            }
        }
        self.targets.validate()
    }

    fn lookup_id(&self, name: &str) -> Option<TargetId> {
        self.scope_ref()
            .imported
            .get(name)
            .or_else(|| self.global_names.get(name))
            .copied()
    }

    /// Looks a name up in every scope, ignoring import visibility.
    fn lookup_anywhere(&self, name: &str) -> Option<TargetId> {
        self.global_names
            .get(name)
            .or_else(|| self.scopes.iter().find_map(|scope| scope.imported.get(name)))
            .copied()
    }

    fn handle(&self, id: TargetId) -> Option<TargetRef> {
        self.targets
            .get(id)
            .map(|target| TargetRef::from_target(id, target))
    }
}

impl ProjectModel for Project {
    fn definition(&self, key: &str) -> Option<&str> {
        self.scope_ref().definitions.get(key).map(String::as_str)
    }

    fn policy_status(&self, policy: PolicyId) -> PolicyStatus {
        self.scope_ref()
            .policies
            .get(&policy)
            .copied()
            .unwrap_or(self.default_policy_status)
    }

    fn find_target_to_use(&self, name: &str, resolve_aliases: bool) -> Option<TargetRef> {
        if resolve_aliases {
            if let Some(id) = self.aliases.get(name) {
                return self.handle(*id);
            }
        }
        self.lookup_id(name).and_then(|id| self.handle(id))
    }

    fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    fn add_alias(&mut self, name: &str, target: &TargetRef) {
        debug!(alias = %name, target = %target.name, "registered alias");
        self.aliases.insert(name.to_string(), target.id);
    }

    fn add_imported_target(&mut self, name: &str, kind: LibraryKind, global: bool) {
        let target = Target::imported(name, kind.into(), global, self.current);
        if global {
            self.insert_global(target);
        } else {
            let id = self.targets.insert(target);
            trace!(%name, ?id, scope = self.current.0, "registered scoped import");
            self.scope_mut().imported.insert(name.to_string(), id);
        }
    }

    fn add_library(
        &mut self,
        name: &str,
        kind: LibraryKind,
        sources: Vec<String>,
        exclude_from_all: bool,
    ) {
        let target = Target::concrete(name, kind.into(), self.current)
            .with_sources(sources)
            .with_exclude_from_all(exclude_from_all);
        self.insert_global(target);
    }

    fn enforce_unique_name(&self, name: &str) -> std::result::Result<(), String> {
        if self.is_alias(name) {
            return Err(format!(
                "cannot create target \"{name}\" because an alias with the same name already exists."
            ));
        }
        let existing = self
            .lookup_anywhere(name)
            .and_then(|id| self.targets.get(id));
        match existing {
            None => Ok(()),
            Some(target) if target.imported => Err(format!(
                "cannot create target \"{name}\" because an imported target with the same name already exists."
            )),
            Some(target) => {
                let directory = self
                    .scope(target.scope)
                    .map_or("", |scope| scope.name.as_str());
                Err(format!(
                    "cannot create target \"{name}\" because another target with the same name already exists. \
                     The existing target is a {} created in source directory \"{directory}\".",
                    target.kind
                ))
            }
        }
    }
}
