//! Configuration for seeding a project.

use libdecl_foundation::{PolicyId, PolicyStatus};

/// Well-known definition keys.
pub mod keys {
    /// Truthy when libraries without a type keyword should be shared.
    pub const BUILD_SHARED_LIBS: &str = "BUILD_SHARED_LIBS";
    /// Truthy when the target platform supports dynamic linking.
    pub const TARGET_SUPPORTS_SHARED_LIBS: &str = "TARGET_SUPPORTS_SHARED_LIBS";
}

/// Initial state of an in-memory project.
#[derive(Clone, Debug)]
pub struct ProjectConfig {
    /// Definitions set in the top-level scope.
    pub definitions: Vec<(String, String)>,
    /// Policies set in the top-level scope.
    pub policies: Vec<(PolicyId, PolicyStatus)>,
    /// Status reported for policies nobody set.
    pub default_policy_status: PolicyStatus,
    /// Whether the platform supports dynamic linking.
    pub supports_dynamic_linking: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            definitions: Vec::new(),
            policies: Vec::new(),
            default_policy_status: PolicyStatus::Warn,
            supports_dynamic_linking: true,
        }
    }
}

impl ProjectConfig {
    /// Creates a configuration where unset policies behave as NEW.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            default_policy_status: PolicyStatus::New,
            ..Self::default()
        }
    }

    /// Builder method to add a definition.
    #[must_use]
    pub fn with_definition(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.definitions.push((key.into(), value.into()));
        self
    }

    /// Builder method to set a policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PolicyId, status: PolicyStatus) -> Self {
        self.policies.push((policy, status));
        self
    }

    /// Builder method to set the status of unset policies.
    #[must_use]
    pub fn with_default_policy_status(mut self, status: PolicyStatus) -> Self {
        self.default_policy_status = status;
        self
    }

    /// Builder method to set dynamic linking support.
    #[must_use]
    pub fn with_dynamic_linking(mut self, supported: bool) -> Self {
        self.supports_dynamic_linking = supported;
        self
    }

    /// Builder method to prefer shared libraries when no type is given.
    #[must_use]
    pub fn with_shared_libs(self, shared: bool) -> Self {
        self.with_definition(keys::BUILD_SHARED_LIBS, if shared { "ON" } else { "OFF" })
    }
}
