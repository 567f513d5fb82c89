//! Compatibility policies.
//!
//! A policy lets a stricter rule phase in without breaking existing build
//! descriptions: each project records, per policy, whether it wants the old
//! or the new behavior.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a compatibility policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PolicyId {
    /// Target names must be valid and must not be reserved.
    TargetNameValidity,
}

impl PolicyId {
    /// All known policies.
    pub const ALL: [Self; 1] = [Self::TargetNameValidity];

    /// The stable identifier used in scripts.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TargetNameValidity => "CMP0037",
        }
    }

    /// Text prefixed to diagnostics issued while the policy is unset.
    #[must_use]
    pub const fn warning_text(self) -> &'static str {
        match self {
            Self::TargetNameValidity => {
                "Policy CMP0037 is not set: Target names should not be reserved and should \
                 match a validity pattern. Use cmake_policy(SET CMP0037 NEW) to silence."
            }
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PolicyId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.code() == s)
            .ok_or_else(|| format!("unknown policy {s}"))
    }
}

/// The raw status a project records for a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PolicyStatus {
    /// Explicitly set to the old behavior.
    Old,
    /// Not set; old behavior with a warning.
    #[default]
    Warn,
    /// Explicitly set to the new behavior.
    New,
    /// New behavior is required where the policy is used.
    RequiredIfUsed,
    /// New behavior is always required.
    RequiredAlways,
}

impl FromStr for PolicyStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "OLD" => Ok(Self::Old),
            "NEW" => Ok(Self::New),
            "WARN" => Ok(Self::Warn),
            other => Err(format!("policy status must be OLD or NEW, got {other}")),
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Old => "OLD",
            Self::Warn => "WARN",
            Self::New => "NEW",
            Self::RequiredIfUsed => "REQUIRED_IF_USED",
            Self::RequiredAlways => "REQUIRED_ALWAYS",
        })
    }
}
