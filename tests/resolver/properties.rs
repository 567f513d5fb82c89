//! Property tests over generated declarations

use libdecl_foundation::{LibraryKind, Severity, TargetKind};
use libdecl_resolver::Resolution;
use proptest::prelude::*;

use crate::support::{RecordingProject, resolve};

fn type_keyword() -> impl Strategy<Value = LibraryKind> {
    prop::sample::select(LibraryKind::ALL.to_vec())
}

fn source_token() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.c"
}

proptest! {
    #[test]
    fn two_type_keywords_never_register(a in type_keyword(), b in type_keyword()) {
        let mut project = RecordingProject::new();
        let (result, _) = resolve(&mut project, &["t", a.keyword(), b.keyword()]);
        prop_assert!(result.is_err());
        prop_assert!(project.calls.is_empty());
    }

    #[test]
    fn explicit_concrete_type_is_kept(
        kind in type_keyword(),
        srcs in prop::collection::vec(source_token(), 1..5),
    ) {
        prop_assume!(kind != LibraryKind::Interface && kind != LibraryKind::Unknown);
        let mut project = RecordingProject::new();
        let mut tokens = vec!["t", kind.keyword()];
        tokens.extend(srcs.iter().map(String::as_str));

        let (result, diagnostics) = resolve(&mut project, &tokens);
        prop_assert_eq!(
            result.unwrap(),
            Resolution::Library { name: "t".to_string(), kind }
        );
        prop_assert!(diagnostics.is_empty());
    }

    #[test]
    fn alias_needs_exactly_three_tokens(extra in prop::collection::vec(source_token(), 0..4)) {
        let mut project =
            RecordingProject::new().with_target("core", TargetKind::StaticLibrary, false);
        let mut tokens = vec!["a", "ALIAS", "core"];
        tokens.extend(extra.iter().map(String::as_str));

        let (result, _) = resolve(&mut project, &tokens);
        prop_assert_eq!(result.is_ok(), extra.is_empty());
        prop_assert_eq!(project.calls.len(), usize::from(extra.is_empty()));
    }

    #[test]
    fn downgrade_warns_once(
        shared in prop::bool::ANY,
        srcs in prop::collection::vec(source_token(), 1..5),
    ) {
        let keyword = if shared { "SHARED" } else { "MODULE" };
        let mut project = RecordingProject::static_only();
        let mut tokens = vec!["t", keyword];
        tokens.extend(srcs.iter().map(String::as_str));

        let (result, diagnostics) = resolve(&mut project, &tokens);
        let is_static = matches!(
            result.unwrap(),
            Resolution::Library { kind: LibraryKind::Static, .. }
        );
        prop_assert!(is_static);
        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(diagnostics[0].severity, Severity::AuthorWarning);
    }
}
