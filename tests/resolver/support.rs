//! A call-recording project model.

use std::collections::HashMap;

use libdecl_foundation::{Diagnostic, LibraryKind, PolicyId, PolicyStatus, Result, TargetKind};
use libdecl_project::{ProjectModel, StandardNameValidator, TargetId, TargetRef, keys};
use libdecl_resolver::{Context, Resolution, Resolver};

/// A registration the resolver asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    AddAlias {
        name: String,
        target: String,
    },
    AddImportedTarget {
        name: String,
        kind: LibraryKind,
        global: bool,
    },
    AddLibrary {
        name: String,
        kind: LibraryKind,
        sources: Vec<String>,
        exclude_from_all: bool,
    },
}

/// Records every registration call and answers lookups from a flat table.
#[derive(Debug, Default)]
pub struct RecordingProject {
    pub definitions: HashMap<String, String>,
    pub policy: PolicyStatus,
    pub targets: HashMap<String, TargetRef>,
    pub aliases: HashMap<String, String>,
    pub calls: Vec<Call>,
    next_index: u32,
}

impl RecordingProject {
    /// A project on a platform with dynamic linking and no other settings.
    pub fn new() -> Self {
        Self::default().with_definition(keys::TARGET_SUPPORTS_SHARED_LIBS, "TRUE")
    }

    /// A project on a platform without dynamic linking.
    pub fn static_only() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, key: &str, value: &str) -> Self {
        self.definitions.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_policy(mut self, status: PolicyStatus) -> Self {
        self.policy = status;
        self
    }

    pub fn with_target(mut self, name: &str, kind: TargetKind, imported: bool) -> Self {
        self.insert(name, kind, imported, false);
        self
    }

    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(alias.to_string(), target.to_string());
        self
    }

    fn insert(&mut self, name: &str, kind: TargetKind, imported: bool, global: bool) {
        self.next_index += 1;
        self.targets.insert(
            name.to_string(),
            TargetRef {
                id: TargetId::new(self.next_index, 1),
                name: name.to_string(),
                kind,
                imported,
                global,
            },
        );
    }
}

impl ProjectModel for RecordingProject {
    fn definition(&self, key: &str) -> Option<&str> {
        self.definitions.get(key).map(String::as_str)
    }

    fn policy_status(&self, _policy: PolicyId) -> PolicyStatus {
        self.policy
    }

    fn find_target_to_use(&self, name: &str, resolve_aliases: bool) -> Option<TargetRef> {
        if resolve_aliases {
            if let Some(target) = self.aliases.get(name) {
                return self.targets.get(target).cloned();
            }
        }
        self.targets.get(name).cloned()
    }

    fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    fn add_alias(&mut self, name: &str, target: &TargetRef) {
        self.calls.push(Call::AddAlias {
            name: name.to_string(),
            target: target.name.clone(),
        });
        self.aliases.insert(name.to_string(), target.name.clone());
    }

    fn add_imported_target(&mut self, name: &str, kind: LibraryKind, global: bool) {
        self.calls.push(Call::AddImportedTarget {
            name: name.to_string(),
            kind,
            global,
        });
        self.insert(name, kind.into(), true, global);
    }

    fn add_library(
        &mut self,
        name: &str,
        kind: LibraryKind,
        sources: Vec<String>,
        exclude_from_all: bool,
    ) {
        self.calls.push(Call::AddLibrary {
            name: name.to_string(),
            kind,
            sources,
            exclude_from_all,
        });
        self.insert(name, kind.into(), false, false);
    }

    fn enforce_unique_name(&self, name: &str) -> std::result::Result<(), String> {
        if self.aliases.contains_key(name) {
            return Err(format!("alias {name} exists"));
        }
        if self.targets.contains_key(name) {
            return Err(format!("target {name} exists"));
        }
        Ok(())
    }
}

/// Resolves one declaration with the default resolver.
pub fn resolve(project: &mut RecordingProject, tokens: &[&str]) -> (Result<Resolution>, Vec<Diagnostic>) {
    let names = StandardNameValidator::new();
    let mut diagnostics = Vec::new();
    let result = {
        let mut ctx = Context::new(project, &names, &mut diagnostics);
        Resolver::new().resolve(&mut ctx, tokens)
    };
    (result, diagnostics)
}

/// Builds an owned source list.
pub fn sources(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}
