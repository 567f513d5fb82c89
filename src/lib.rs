//! libdecl - Library declaration resolver
//!
//! This crate re-exports all layers of the libdecl system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: libdecl_runtime     - Script session, REPL, CLI, snapshots
//! Layer 2: libdecl_resolver    - Classifier, policy gate, resolution flows
//! Layer 1: libdecl_project     - Project model, target store, name validation
//! Layer 0: libdecl_foundation  - Errors, kinds, diagnostics, policies
//! ```

pub use libdecl_foundation as foundation;
pub use libdecl_project as project;
pub use libdecl_resolver as resolver;
pub use libdecl_runtime as runtime;
