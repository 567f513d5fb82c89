//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use libdecl_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn missing_target_name_message() {
    let err = Error::new(ErrorKind::MissingTargetName);
    assert_eq!(err.to_string(), "called with incorrect number of arguments");
}

#[test]
fn interface_conflicts_name_the_keyword() {
    assert_eq!(
        Error::interface_conflict("SHARED").to_string(),
        "INTERFACE library specified with conflicting SHARED type."
    );
    assert_eq!(
        Error::interface_conflict("ALIAS").to_string(),
        "INTERFACE library specified with conflicting ALIAS type."
    );
    assert_eq!(
        Error::new(ErrorKind::InterfaceMultipleTypes).to_string(),
        "INTERFACE library specified with conflicting/multiple types."
    );
}

#[test]
fn interface_exclude_message() {
    let msg = Error::new(ErrorKind::InterfaceExcludeFromAll).to_string();
    assert_eq!(msg, "INTERFACE library may not be used with EXCLUDE_FROM_ALL.");
}

#[test]
fn alias_messages_name_both_targets() {
    let err = Error::new(ErrorKind::AliasTargetMissing {
        alias: "ns::core".to_string(),
        target: "core".to_string(),
    });
    let msg = err.to_string();
    assert!(msg.contains("\"ns::core\""));
    assert!(msg.contains("\"core\""));
    assert!(msg.contains("does not already exist"));
}

#[test]
fn imported_messages() {
    assert_eq!(
        Error::new(ErrorKind::ImportedWithoutType).to_string(),
        "called with IMPORTED argument but no library type specified."
    );
    assert!(
        Error::new(ErrorKind::ImportedNameCollision("z".to_string()))
            .to_string()
            .contains("\"z\"")
    );
}

#[test]
fn duplicate_target_passes_message_through() {
    let err = Error::duplicate_target("an alias with the same name already exists.");
    assert_eq!(err.to_string(), "an alias with the same name already exists.");
    assert!(err.is_structural());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_not_part_of_message() {
    let err = Error::new(ErrorKind::AliasArity)
        .with_context(ErrorContext::new().with_command("add_library").with_line(4));
    assert_eq!(err.to_string(), "ALIAS requires exactly one target argument.");
    assert_eq!(err.context.unwrap().line, Some(4));
}

#[test]
fn context_display_variants() {
    let full = ErrorContext::new()
        .with_source("CMakeLists.txt")
        .with_line(12)
        .with_command("add_library");
    assert_eq!(full.to_string(), "at CMakeLists.txt:12 in add_library()");

    let line_only = ErrorContext::new().with_line(3);
    assert_eq!(line_only.to_string(), "at line 3");

    let command_only = ErrorContext::new().with_command("set");
    assert_eq!(command_only.to_string(), "in set()");

    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn non_structural_kinds() {
    assert!(!Error::new(ErrorKind::UnknownCommand("x".to_string())).is_structural());
    assert!(!Error::new(ErrorKind::Serialization("bad".to_string())).is_structural());
    assert!(Error::new(ErrorKind::InterfaceWithSources).is_structural());
}
