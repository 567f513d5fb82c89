//! Script parsing

use libdecl_foundation::ErrorKind;
use libdecl_runtime::script::is_complete;
use libdecl_runtime::{Statement, parse};

#[test]
fn parses_a_build_description() {
    let source = r#"
# top-level settings
set(BUILD_SHARED_LIBS OFF)

add_library(core STATIC
    src/a.c
    "src/with space.c"
)
ADD_LIBRARY(ns::core ALIAS core)
"#;
    let statements = parse(source).unwrap();

    assert_eq!(statements.len(), 3);
    assert_eq!(
        statements[1],
        Statement::new(
            "add_library",
            vec![
                "core".to_string(),
                "STATIC".to_string(),
                "src/a.c".to_string(),
                "src/with space.c".to_string(),
            ],
            5
        )
    );
    assert_eq!(statements[2].command, "add_library");
    assert_eq!(statements[2].line, 9);
}

#[test]
fn quoted_keywords_are_plain_arguments() {
    let statements = parse(r#"add_library(foo "STATIC")"#).unwrap();
    assert_eq!(statements[0].args, ["foo", "STATIC"]);
}

#[test]
fn syntax_errors_report_lines() {
    let err = parse("set(A 1)\n\nadd_library(foo").unwrap_err();
    match err.kind {
        ErrorKind::ScriptSyntax { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("unterminated"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn completeness_tracks_open_lists() {
    assert!(is_complete("add_library(a b)"));
    assert!(is_complete("# add_library("));
    assert!(!is_complete("add_library(a"));
    assert!(!is_complete("add_library(a \"b)"));
}
