//! Integration tests for Layer 3: Runtime
//!
//! Tests for script parsing, session evaluation, snapshots, and the REPL.

mod scripts;
