//! End-to-end declarations and the exact registrations they produce

use libdecl_foundation::{ErrorKind, LibraryKind, Severity, TargetKind};
use libdecl_project::keys;

use crate::support::{Call, RecordingProject, resolve, sources};

#[test]
fn bare_name_without_shared_preference() {
    let mut project = RecordingProject::new().with_definition(keys::BUILD_SHARED_LIBS, "OFF");
    let (result, diagnostics) = resolve(&mut project, &["foo"]);

    assert!(result.is_ok());
    assert_eq!(
        project.calls,
        [Call::AddLibrary {
            name: "foo".to_string(),
            kind: LibraryKind::Static,
            sources: Vec::new(),
            exclude_from_all: false
        }]
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
}

#[test]
fn shared_with_sources() {
    let mut project = RecordingProject::new();
    let (result, diagnostics) = resolve(&mut project, &["foo", "SHARED", "a.c", "b.c"]);

    assert!(result.is_ok());
    assert!(diagnostics.is_empty());
    assert_eq!(
        project.calls,
        [Call::AddLibrary {
            name: "foo".to_string(),
            kind: LibraryKind::Shared,
            sources: sources(&["a.c", "b.c"]),
            exclude_from_all: false
        }]
    );
}

#[test]
fn interface_library() {
    let mut project = RecordingProject::new();
    let (result, _) = resolve(&mut project, &["foo", "INTERFACE"]);

    assert!(result.is_ok());
    assert_eq!(
        project.calls,
        [Call::AddLibrary {
            name: "foo".to_string(),
            kind: LibraryKind::Interface,
            sources: Vec::new(),
            exclude_from_all: false
        }]
    );
}

#[test]
fn alias_of_static_library() {
    let mut project = RecordingProject::new().with_target("bar", TargetKind::StaticLibrary, false);
    let (result, _) = resolve(&mut project, &["foo", "ALIAS", "bar"]);

    assert!(result.is_ok());
    assert_eq!(
        project.calls,
        [Call::AddAlias {
            name: "foo".to_string(),
            target: "bar".to_string()
        }]
    );
}

#[test]
fn conflicting_types() {
    let mut project = RecordingProject::new();
    let (result, _) = resolve(&mut project, &["foo", "STATIC", "SHARED"]);

    let err = result.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MultipleTypes { .. }));
    assert!(err.to_string().contains("conflicting/multiple types"));
    assert!(project.calls.is_empty());
}

#[test]
fn imported_without_type() {
    let mut project = RecordingProject::new();
    let (result, _) = resolve(&mut project, &["foo", "IMPORTED", "GLOBAL"]);

    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ImportedWithoutType);
    assert!(err.to_string().contains("no library type specified"));
    assert!(project.calls.is_empty());
}
