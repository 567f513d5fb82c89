//! Integration tests for the concrete library flow

use libdecl_foundation::{ErrorKind, LibraryKind, Severity, TargetKind};
use libdecl_project::keys;
use libdecl_resolver::Resolution;

use crate::support::{Call, RecordingProject, resolve, sources};

fn registered_kind(project: &mut RecordingProject, tokens: &[&str]) -> LibraryKind {
    match resolve(project, tokens).0.unwrap() {
        Resolution::Library { kind, .. } => kind,
        other => panic!("expected a library, got {other:?}"),
    }
}

// =============================================================================
// Default kind
// =============================================================================

#[test]
fn default_kind_is_static_when_unset_or_off() {
    let mut project = RecordingProject::new();
    assert_eq!(registered_kind(&mut project, &["a", "a.c"]), LibraryKind::Static);

    let mut project = RecordingProject::new().with_definition(keys::BUILD_SHARED_LIBS, "OFF");
    assert_eq!(registered_kind(&mut project, &["a", "a.c"]), LibraryKind::Static);
}

#[test]
fn default_kind_is_shared_unless_off() {
    for value in ["ON", "maybe"] {
        let mut project =
            RecordingProject::new().with_definition(keys::BUILD_SHARED_LIBS, value);
        assert_eq!(
            registered_kind(&mut project, &["a", "a.c"]),
            LibraryKind::Shared,
            "BUILD_SHARED_LIBS={value}"
        );
    }
}

// =============================================================================
// Capability downgrade
// =============================================================================

#[test]
fn dynamic_kinds_downgrade_without_capability() {
    for tokens in [
        &["a", "SHARED", "a.c"][..],
        &["a", "MODULE", "a.c"][..],
    ] {
        let mut project = RecordingProject::static_only();
        let (result, diagnostics) = resolve(&mut project, tokens);

        assert!(matches!(
            result.unwrap(),
            Resolution::Library {
                kind: LibraryKind::Static,
                ..
            }
        ));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::AuthorWarning);
        assert!(diagnostics[0].message.contains("STATIC library instead"));
    }
}

#[test]
fn default_shared_downgrades_without_capability() {
    let mut project =
        RecordingProject::static_only().with_definition(keys::BUILD_SHARED_LIBS, "ON");
    let (result, diagnostics) = resolve(&mut project, &["a", "a.c"]);

    assert!(matches!(
        result.unwrap(),
        Resolution::Library {
            kind: LibraryKind::Static,
            ..
        }
    ));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::AuthorWarning);
}

#[test]
fn object_is_never_downgraded() {
    let mut project = RecordingProject::static_only();
    let (result, diagnostics) = resolve(&mut project, &["o", "OBJECT", "o.c"]);
    assert!(matches!(
        result.unwrap(),
        Resolution::Library {
            kind: LibraryKind::Object,
            ..
        }
    ));
    assert!(diagnostics.is_empty());
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn duplicate_name_rejected() {
    let mut project = RecordingProject::new().with_target("a", TargetKind::Executable, false);
    let (result, diagnostics) = resolve(&mut project, &["a", "STATIC", "a.c"]);

    assert_eq!(
        result.unwrap_err().kind,
        ErrorKind::DuplicateTarget("target a exists".to_string())
    );
    assert!(diagnostics.is_empty());
    assert!(project.calls.is_empty());
}

#[test]
fn interface_registers_without_diagnostics() {
    let mut project = RecordingProject::static_only();
    let (result, diagnostics) = resolve(&mut project, &["headers", "INTERFACE"]);

    assert!(result.is_ok());
    assert!(diagnostics.is_empty());
    assert_eq!(
        project.calls,
        [Call::AddLibrary {
            name: "headers".to_string(),
            kind: LibraryKind::Interface,
            sources: Vec::new(),
            exclude_from_all: false
        }]
    );
}

#[test]
fn namespaced_interface_name_rejected() {
    let mut project = RecordingProject::new();
    let (result, _) = resolve(&mut project, &["ns::foo", "INTERFACE"]);
    assert_eq!(
        result.unwrap_err().kind,
        ErrorKind::InvalidInterfaceName("ns::foo".to_string())
    );
    assert!(project.calls.is_empty());
}

#[test]
fn unknown_is_fatal_but_succeeds() {
    let mut project = RecordingProject::new();
    let (result, diagnostics) = resolve(&mut project, &["u", "UNKNOWN", "u.c"]);

    assert_eq!(
        result.unwrap(),
        Resolution::NotRegistered {
            name: "u".to_string(),
            kind: LibraryKind::Unknown
        }
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::FatalError);
    assert!(project.calls.is_empty());
}

#[test]
fn missing_sources_warns_and_registers() {
    let mut project = RecordingProject::new();
    let (result, diagnostics) = resolve(&mut project, &["empty", "STATIC"]);

    assert!(result.unwrap().is_registered());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(diagnostics[0].message.contains("empty"));
    assert_eq!(project.calls.len(), 1);
}

#[test]
fn exclude_from_all_passes_through() {
    let mut project = RecordingProject::new();
    resolve(&mut project, &["a", "EXCLUDE_FROM_ALL", "STATIC", "a.c", "b.c"])
        .0
        .unwrap();

    assert_eq!(
        project.calls,
        [Call::AddLibrary {
            name: "a".to_string(),
            kind: LibraryKind::Static,
            sources: sources(&["a.c", "b.c"]),
            exclude_from_all: true
        }]
    );
}
