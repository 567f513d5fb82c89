//! Library declaration classifier, policy gate, and resolution flows.
//!
//! This crate turns the tokens of one library declaration into exactly one
//! registration in a [`ProjectModel`](libdecl_project::ProjectModel):
//! - [`classify`] - Modifier scan producing a [`Descriptor`]
//! - [`policy`] - Three-level gate for invalid or reserved names
//! - [`alias`], [`imported`], [`library`] - The three finalization flows
//! - [`Resolver`] - Dispatch over a [`Context`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alias;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod imported;
pub mod library;
pub mod policy;
pub mod resolver;

pub use classify::{ScanState, classify};
pub use config::ResolverConfig;
pub use descriptor::{Descriptor, Keyword};
pub use policy::PolicyLevel;
pub use resolver::{Context, Resolution, Resolver};
