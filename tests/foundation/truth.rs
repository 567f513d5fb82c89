//! Integration tests for definition truthiness

use libdecl_foundation::{is_off, is_on};

#[test]
fn on_values() {
    for value in ["1", "ON", "on", "Yes", "TRUE", "y", "42", "-3"] {
        assert!(is_on(Some(value)), "{value} should be on");
    }
}

#[test]
fn off_values() {
    for value in ["", "0", "OFF", "no", "False", "N", "IGNORE", "NOTFOUND", "ZLIB-NOTFOUND"] {
        assert!(is_off(Some(value)), "{value} should be off");
        assert!(!is_on(Some(value)), "{value} should not be on");
    }
    assert!(is_off(None));
}

#[test]
fn unset_is_neither_on_nor_truthy() {
    assert!(!is_on(None));
}

#[test]
fn arbitrary_text_is_neither() {
    assert!(!is_on(Some("maybe")));
    assert!(!is_off(Some("maybe")));
}
