//! Tests for the `Location` value type.

use crate::Location;

#[test]
fn none_has_no_value() {
    assert!(!Location::NONE.has_value());
    assert_eq!(Location::NONE.origin(), None);
    assert_eq!(Location::NONE.path(), None);
    assert_eq!(Location::NONE.line(), 0);
    assert_eq!(Location::NONE.column(), 0);
}

#[test]
fn default_is_none() {
    assert_eq!(Location::default(), Location::NONE);
}

#[test]
fn new_starts_at_line_one() {
    let location = Location::new(Some("query.graphql".to_string()), None);
    assert_eq!(location.line(), 1);
    assert_eq!(location.column(), 0);
    assert!(location.has_value());
}

/// Line and column only count as a position when both are set.
#[test]
fn has_value_requires_both_line_and_column() {
    assert!(!Location::at(None, None, 1, 0).has_value());
    assert!(!Location::at(None, None, 0, 5).has_value());
    assert!(Location::at(None, None, 1, 5).has_value());
    assert!(Location::at(Some("a".to_string()), None, 0, 0).has_value());
    assert!(Location::at(None, Some("b".to_string()), 0, 0).has_value());
}

#[test]
fn append_path_concatenates_and_resets_position() {
    let base = Location::at(
        Some("request.json".to_string()),
        Some("/payload".to_string()),
        7,
        12,
    );
    let appended = base.append_path("/query");
    assert_eq!(appended.origin(), Some("request.json"));
    assert_eq!(appended.path(), Some("/payload/query"));
    assert_eq!(appended.line(), 1);
    assert_eq!(appended.column(), 0);
}

#[test]
fn append_path_without_existing_path() {
    let appended = Location::NONE.append_path("/query");
    assert_eq!(appended.path(), Some("/query"));
    assert_eq!(appended.origin(), None);
}

#[test]
fn display_joins_present_parts() {
    let location = Location::at(
        Some("query.graphql".to_string()),
        Some("/op".to_string()),
        3,
        9,
    );
    assert_eq!(
        location.to_string(),
        "query.graphql, /op, line 3, column 9"
    );
}

#[test]
fn display_omits_absent_parts() {
    assert_eq!(Location::NONE.to_string(), "");
    assert_eq!(
        Location::at(None, None, 2, 4).to_string(),
        "line 2, column 4"
    );
    assert_eq!(
        Location::new(Some("q.graphql".to_string()), None).to_string(),
        "q.graphql"
    );
}
