//! Truthiness of definition values.
//!
//! Definitions are plain strings. These helpers decide whether a value reads
//! as a true or a false constant in the build language.

/// Returns true if the value is a true constant.
///
/// `1`, `ON`, `YES`, `TRUE`, `Y` and any non-zero integer are true
/// (case-insensitive). Everything else, including an unset value, is not.
#[must_use]
pub fn is_on(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let upper = value.to_ascii_uppercase();
    match upper.as_str() {
        "1" | "ON" | "YES" | "TRUE" | "Y" => true,
        other => other.parse::<i64>().is_ok_and(|n| n != 0),
    }
}

/// Returns true if the value is a false constant.
///
/// Unset, empty, `0`, `OFF`, `NO`, `FALSE`, `N`, `IGNORE`, `NOTFOUND` and
/// anything ending in `-NOTFOUND` are false (case-insensitive). A value may be
/// neither on nor off, e.g. `"libfoo"`.
#[must_use]
pub fn is_off(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return true;
    };
    let upper = value.to_ascii_uppercase();
    matches!(
        upper.as_str(),
        "" | "0" | "OFF" | "NO" | "FALSE" | "N" | "IGNORE" | "NOTFOUND"
    ) || upper.ends_with("-NOTFOUND")
}
