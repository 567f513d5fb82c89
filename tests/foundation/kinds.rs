//! Integration tests for library and target kinds

use libdecl_foundation::{LibraryKind, PolicyId, PolicyStatus, TargetKind};

#[test]
fn keywords_round_trip() {
    for kind in LibraryKind::ALL {
        assert_eq!(LibraryKind::from_keyword(kind.keyword()), Some(kind));
        assert_eq!(kind.to_string(), kind.keyword());
    }
    assert_eq!(LibraryKind::from_keyword("shared"), None);
    assert_eq!(LibraryKind::from_keyword("ALIAS"), None);
}

#[test]
fn only_shared_and_module_are_dynamic() {
    let dynamic: Vec<_> = LibraryKind::ALL
        .into_iter()
        .filter(|k| k.is_dynamic())
        .collect();
    assert_eq!(dynamic, [LibraryKind::Shared, LibraryKind::Module]);
}

#[test]
fn aliasable_target_kinds() {
    assert!(TargetKind::StaticLibrary.is_aliasable_library());
    assert!(TargetKind::SharedLibrary.is_aliasable_library());
    assert!(TargetKind::ModuleLibrary.is_aliasable_library());
    assert!(TargetKind::ObjectLibrary.is_aliasable_library());
    assert!(TargetKind::InterfaceLibrary.is_aliasable_library());
    assert!(!TargetKind::UnknownLibrary.is_aliasable_library());
    assert!(!TargetKind::Executable.is_aliasable_library());
    assert!(!TargetKind::Utility.is_aliasable_library());
}

#[test]
fn library_kind_conversion() {
    for kind in LibraryKind::ALL {
        assert_eq!(TargetKind::from(kind).library_kind(), Some(kind));
    }
    assert_eq!(TargetKind::Executable.library_kind(), None);
}

#[test]
fn policy_parsing() {
    assert_eq!("CMP0037".parse::<PolicyId>(), Ok(PolicyId::TargetNameValidity));
    assert!("CMP0000".parse::<PolicyId>().is_err());
    assert_eq!("NEW".parse::<PolicyStatus>(), Ok(PolicyStatus::New));
    assert_eq!(PolicyStatus::default(), PolicyStatus::Warn);
}
