//! Integration tests for token classification

use libdecl_foundation::{ErrorKind, LibraryKind};
use libdecl_resolver::{Descriptor, ScanState, classify};
use libdecl_resolver::classify::step;

const CONCRETE: [LibraryKind; 5] = [
    LibraryKind::Static,
    LibraryKind::Shared,
    LibraryKind::Module,
    LibraryKind::Object,
    LibraryKind::Unknown,
];

// =============================================================================
// Type Keywords
// =============================================================================

#[test]
fn single_type_keyword_is_exact() {
    for kind in LibraryKind::ALL {
        let d = classify(&["foo", kind.keyword()]).unwrap();
        assert_eq!(d.kind, Some(kind));
        assert!(d.kind_explicit());
        assert!(d.remainder.is_empty());
    }
}

#[test]
fn no_type_keyword_leaves_kind_unspecified() {
    let d = classify(&["foo", "a.c"]).unwrap();
    assert_eq!(d.kind, None);
    assert!(!d.kind_explicit());
}

#[test]
fn two_concrete_types_conflict_in_either_order() {
    for first in CONCRETE {
        for second in CONCRETE {
            let err = classify(&["foo", first.keyword(), second.keyword()]).unwrap_err();
            assert_eq!(
                err.kind,
                ErrorKind::MultipleTypes {
                    first: first.keyword(),
                    second: second.keyword()
                }
            );
        }
    }
}

#[test]
fn interface_then_concrete_names_the_keyword() {
    for kind in CONCRETE {
        let err = classify(&["foo", "INTERFACE", kind.keyword()]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InterfaceTypeConflict(kind.keyword()));
    }
}

#[test]
fn concrete_then_interface_is_multiple_types() {
    for kind in CONCRETE {
        let err = classify(&["foo", kind.keyword(), "INTERFACE"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InterfaceMultipleTypes);
    }
    let err = classify(&["foo", "INTERFACE", "INTERFACE"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InterfaceMultipleTypes);
}

#[test]
fn conflict_fires_before_later_tokens() {
    // The conflict is reported on the token that causes it even though a
    // later token would also conflict.
    let err = classify(&["foo", "STATIC", "SHARED", "INTERFACE"]).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::MultipleTypes {
            first: "STATIC",
            second: "SHARED"
        }
    );
}

// =============================================================================
// Interface Constraints
// =============================================================================

#[test]
fn interface_and_exclude_conflict_in_either_order() {
    for tokens in [
        ["foo", "INTERFACE", "EXCLUDE_FROM_ALL"],
        ["foo", "EXCLUDE_FROM_ALL", "INTERFACE"],
    ] {
        let err = classify(&tokens).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InterfaceExcludeFromAll);
    }
}

#[test]
fn interface_and_alias_conflict_in_either_order() {
    for tokens in [["foo", "INTERFACE", "ALIAS"], ["foo", "ALIAS", "INTERFACE"]] {
        let err = classify(&tokens).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InterfaceTypeConflict("ALIAS"));
    }
}

#[test]
fn interface_rejects_trailing_tokens() {
    let err = classify(&["foo", "INTERFACE", "a.c"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InterfaceWithSources);
}

#[test]
fn interface_imported_global() {
    let d = classify(&["foo", "INTERFACE", "IMPORTED", "GLOBAL"]).unwrap();
    assert!(d.is_interface());
    assert!(d.is_imported);
    assert!(d.is_global_import);
}

// =============================================================================
// Scan Termination
// =============================================================================

#[test]
fn global_before_imported_is_not_a_modifier() {
    let d = classify(&["foo", "GLOBAL", "IMPORTED"]).unwrap();
    assert!(!d.is_global_import);
    assert!(!d.is_imported);
    assert_eq!(d.remainder, ["GLOBAL", "IMPORTED"]);
}

#[test]
fn global_after_imported_is_a_modifier() {
    let d = classify(&["foo", "SHARED", "IMPORTED", "GLOBAL", "x"]).unwrap();
    assert!(d.is_imported);
    assert!(d.is_global_import);
    assert_eq!(d.remainder, ["x"]);
}

#[test]
fn keywords_after_first_source_are_kept_verbatim() {
    let d = classify(&["foo", "STATIC", "a.c", "SHARED", "EXCLUDE_FROM_ALL"]).unwrap();
    assert_eq!(d.kind, Some(LibraryKind::Static));
    assert!(!d.exclude_from_all);
    assert_eq!(d.remainder, ["a.c", "SHARED", "EXCLUDE_FROM_ALL"]);
    assert_eq!(d.token_count, 5);
}

#[test]
fn keywords_are_case_sensitive() {
    let d = classify(&["foo", "static", "STATIC"]).unwrap();
    assert_eq!(d.kind, None);
    assert_eq!(d.remainder, ["static", "STATIC"]);
}

#[test]
fn empty_declaration_fails() {
    let tokens: [&str; 0] = [];
    let err = classify(&tokens).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingTargetName);
}

#[test]
fn name_is_never_a_keyword() {
    let d = classify(&["STATIC"]).unwrap();
    assert_eq!(d.name, "STATIC");
    assert_eq!(d.kind, None);
}

// =============================================================================
// State Machine
// =============================================================================

#[test]
fn step_transitions() {
    let mut d = Descriptor::new("foo");

    let state = step(ScanState::Modifiers, &mut d, "IMPORTED").unwrap();
    assert_eq!(state, ScanState::Modifiers);

    let state = step(state, &mut d, "a.c").unwrap();
    assert_eq!(state, ScanState::Remainder);

    let state = step(state, &mut d, "GLOBAL").unwrap();
    assert_eq!(state, ScanState::Remainder);
    assert!(!d.is_global_import);
    assert_eq!(d.remainder, ["a.c", "GLOBAL"]);
    assert_eq!(d.token_count, 4);
}
