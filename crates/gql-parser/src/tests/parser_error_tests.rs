//! Tests for parse failure behavior: fail-fast ordering, recursion
//! limits, and location/origin propagation into errors.

use crate::tests::utils::assert_error_position;
use crate::tests::utils::parse_document;
use crate::tests::utils::parse_error;
use crate::Location;
use crate::Parser;
use crate::Scanner;
use crate::SyntaxErrorKind;
use crate::DEFAULT_RECURSION_LIMIT;

// =============================================================================
// Fail-fast behavior
// =============================================================================

/// The first problem aborts the parse; later problems are never reached.
#[test]
fn parsing_stops_at_the_first_error() {
    let error = parse_error("{ a %% b %% }");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnexpectedCharacter { found: '%' }
    ));
    assert_error_position(&error, 1, 5);
}

#[test]
fn scan_errors_surface_through_parse() {
    let error = parse_error("{ a \"oops }");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnterminatedString
    ));
    assert_error_position(&error, 1, 5);
}

#[test]
fn eof_errors_have_their_own_kind() {
    let error = parse_error("{ a");
    match error.kind() {
        SyntaxErrorKind::UnexpectedEof { expected } => assert_eq!(expected, "`}`"),
        other => panic!("Expected UnexpectedEof, got: {other:?}"),
    }
}

#[test]
fn positions_span_lines() {
    let error = parse_error("query A {\n  field(\n}");
    assert_eq!(error.message(), "expected name, found `}`");
    assert_error_position(&error, 3, 1);
}

// =============================================================================
// Recursion limits
// =============================================================================

fn nested_selection_sets(depth: usize) -> String {
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("{ f ");
    }
    source.push_str(&"}".repeat(depth));
    source
}

#[test]
fn nesting_at_the_default_limit_parses() {
    parse_document(&nested_selection_sets(DEFAULT_RECURSION_LIMIT));
}

#[test]
fn nesting_past_the_default_limit_fails() {
    let error = parse_error(&nested_selection_sets(DEFAULT_RECURSION_LIMIT + 1));
    assert_eq!(
        error.message(),
        "nesting exceeds the recursion limit of 64"
    );
    match error.kind() {
        SyntaxErrorKind::RecursionLimitExceeded { limit } => {
            assert_eq!(*limit, DEFAULT_RECURSION_LIMIT);
        }
        other => panic!("Expected RecursionLimitExceeded, got: {other:?}"),
    }
}

#[test]
fn list_value_nesting_counts_toward_the_limit() {
    let source = format!(
        "{{ f(x: {}{}) }}",
        "[".repeat(DEFAULT_RECURSION_LIMIT),
        "]".repeat(DEFAULT_RECURSION_LIMIT)
    );
    let error = parse_error(&source);
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::RecursionLimitExceeded { .. }
    ));
}

#[test]
fn list_type_nesting_counts_toward_the_limit() {
    let source = format!(
        "query ($x: {}Int{}) {{ f }}",
        "[".repeat(DEFAULT_RECURSION_LIMIT),
        "]".repeat(DEFAULT_RECURSION_LIMIT)
    );
    let error = parse_error(&source);
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::RecursionLimitExceeded { .. }
    ));
}

#[test]
fn the_recursion_limit_is_configurable() {
    let location = Location::NONE;

    let shallow = nested_selection_sets(4);
    let parser = Parser::new(Scanner::new(&shallow, &location)).with_recursion_limit(4);
    if let Err(error) = parser.parse_document() {
        panic!("Expected nesting of 4 to parse with a limit of 4, got: {error}");
    }

    let deep = nested_selection_sets(5);
    let parser = Parser::new(Scanner::new(&deep, &location)).with_recursion_limit(4);
    match parser.parse_document() {
        Err(error) => {
            assert_eq!(error.message(), "nesting exceeds the recursion limit of 4");
            assert!(matches!(
                error.kind(),
                SyntaxErrorKind::RecursionLimitExceeded { limit: 4 }
            ));
        }
        Ok(document) => panic!("Expected the limit to trip, got: {document:?}"),
    }
}

// =============================================================================
// Origin propagation
// =============================================================================

#[test]
fn seeded_origins_flow_into_parse_errors() {
    let location = Location::new(
        Some("request.json".to_string()),
        Some("/payload/query".to_string()),
    );
    let error = match crate::parse(&location, "{ %") {
        Err(error) => error,
        Ok(document) => panic!("Expected a syntax error, got: {document:?}"),
    };
    assert_eq!(error.location().origin(), Some("request.json"));
    assert_eq!(error.location().path(), Some("/payload/query"));
    assert_eq!(
        error.format_oneline(),
        "request.json:1:3: error: unexpected character `%`"
    );
}

#[test]
fn seeded_lines_offset_error_positions() {
    let location = Location::at(Some("doc.md".to_string()), None, 10, 0);
    let error = match crate::parse(&location, "{\n%") {
        Err(error) => error,
        Ok(document) => panic!("Expected a syntax error, got: {document:?}"),
    };
    assert_error_position(&error, 11, 1);
}
