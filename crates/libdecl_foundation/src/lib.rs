//! Core types, errors, diagnostics, and policy status for libdecl.
//!
//! This crate provides:
//! - [`Error`] - Structural failure of a declaration, with context
//! - [`LibraryKind`] / [`TargetKind`] - What a declaration asks for and what the project holds
//! - [`DiagnosticSink`] - The diagnostic channel, with [`DiagnosticLog`] as a collector
//! - [`PolicyId`] / [`PolicyStatus`] - Compatibility policy identifiers and raw states
//! - [`is_on`] / [`is_off`] - Truthiness of definition values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;
pub mod kind;
pub mod policy;
pub mod truth;

pub use diagnostic::{Diagnostic, DiagnosticLog, DiagnosticSink, Severity};
pub use error::{Error, ErrorContext, ErrorKind};
pub use kind::{LibraryKind, TargetKind};
pub use policy::{PolicyId, PolicyStatus};
pub use truth::{is_off, is_on};

/// Result type alias using libdecl's Error.
pub type Result<T> = std::result::Result<T, Error>;
