//! Various test utils.

use crate::ast::Document;
use crate::Location;
use crate::SyntaxError;

/// Parses `source` with no seed location, panicking on failure.
pub fn parse_document(source: &str) -> Document {
    match crate::parse(&Location::NONE, source) {
        Ok(document) => document,
        Err(error) => panic!("Expected source to parse, got error: {error}"),
    }
}

/// Parses `source`, expecting it to fail, and returns the error.
pub fn parse_error(source: &str) -> SyntaxError {
    match crate::parse(&Location::NONE, source) {
        Ok(document) => panic!("Expected a syntax error, got: {document:?}"),
        Err(error) => error,
    }
}

/// Asserts that `error` points at the given 1-based line and column.
pub fn assert_error_position(error: &SyntaxError, line: usize, column: usize) {
    assert_eq!(
        (error.location().line(), error.location().column()),
        (line, column),
        "error at wrong position: {error}"
    );
}
