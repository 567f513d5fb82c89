//! Script evaluation, REPL, CLI, and project snapshots for libdecl.
//!
//! This crate provides:
//! - [`script`] - Parser for build-description scripts
//! - [`Session`] - Evaluates script statements against a project
//! - [`Repl`] - Interactive read-eval-print loop
//! - Project snapshots in `MessagePack` format
//! - Logging setup for the `libdecl` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod logging;
pub mod repl;
pub mod script;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::Repl;
pub use script::{Statement, parse};
pub use serialize::{Snapshot, from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{Outcome, Session, describe_error};
