//! Resolver configuration.

use libdecl_foundation::PolicyId;
use libdecl_project::keys;

/// Configuration for the declaration resolver.
///
/// Names the definitions and policy the resolver consults; the values
/// themselves live in the project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Definition that makes untyped libraries shared when truthy.
    pub prefer_shared_key: String,
    /// Definition that reports dynamic linking support.
    pub dynamic_linking_key: String,
    /// Policy gating invalid or reserved target names.
    pub name_policy: PolicyId,
    /// Separator that marks a namespaced name, forbidden in interface library names.
    pub namespace_separator: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            prefer_shared_key: keys::BUILD_SHARED_LIBS.to_string(),
            dynamic_linking_key: keys::TARGET_SUPPORTS_SHARED_LIBS.to_string(),
            name_policy: PolicyId::TargetNameValidity,
            namespace_separator: "::".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Builder method to set the prefer-shared definition key.
    #[must_use]
    pub fn with_prefer_shared_key(mut self, key: impl Into<String>) -> Self {
        self.prefer_shared_key = key.into();
        self
    }

    /// Builder method to set the dynamic linking definition key.
    #[must_use]
    pub fn with_dynamic_linking_key(mut self, key: impl Into<String>) -> Self {
        self.dynamic_linking_key = key.into();
        self
    }

    /// Builder method to set the name policy.
    #[must_use]
    pub fn with_name_policy(mut self, policy: PolicyId) -> Self {
        self.name_policy = policy;
        self
    }

    /// Builder method to set the namespace separator.
    #[must_use]
    pub fn with_namespace_separator(mut self, separator: impl Into<String>) -> Self {
        self.namespace_separator = separator.into();
        self
    }
}
