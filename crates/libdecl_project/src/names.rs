//! Target name validation.

/// Syntax and reserved-name checks for target names.
pub trait NameValidator {
    /// Returns true if the name is usable wherever a target name is expected,
    /// including inside generator expressions.
    fn is_valid_target_name(&self, name: &str) -> bool;

    /// Returns true if the name collides with a target the build generators
    /// create themselves.
    fn is_reserved_target(&self, name: &str) -> bool;
}

/// Names the generators reserve for their own targets.
pub const RESERVED_TARGET_NAMES: &[&str] = &[
    "all",
    "ALL_BUILD",
    "help",
    "install",
    "INSTALL",
    "preinstall",
    "clean",
    "edit_cache",
    "rebuild_cache",
    "test",
    "RUN_TESTS",
    "package",
    "PACKAGE",
    "package_source",
    "ZERO_CHECK",
];

/// The stock validator: names are one or more of `[A-Za-z0-9_.:+-]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardNameValidator;

impl StandardNameValidator {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '+' | '-')
}

impl NameValidator for StandardNameValidator {
    fn is_valid_target_name(&self, name: &str) -> bool {
        !name.is_empty() && name.chars().all(is_name_char)
    }

    fn is_reserved_target(&self, name: &str) -> bool {
        RESERVED_TARGET_NAMES.contains(&name)
    }
}
