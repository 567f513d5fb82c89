//! Project model, target storage, and name validation for libdecl.
//!
//! This crate provides:
//! - [`ProjectModel`] - The lookups and registrations a resolver may perform
//! - [`NameValidator`] - Target name syntax and reserved-name checks
//! - [`Project`] - In-memory project with directory scopes and alias table
//! - [`TargetStore`] - Generational target storage backing weak alias references

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod model;
pub mod names;
pub mod project;
pub mod store;
pub mod target;

pub use config::{ProjectConfig, keys};
pub use model::ProjectModel;
pub use names::{NameValidator, StandardNameValidator};
pub use project::{Project, Scope};
pub use store::TargetStore;
pub use target::{ScopeId, Target, TargetId, TargetRef};
