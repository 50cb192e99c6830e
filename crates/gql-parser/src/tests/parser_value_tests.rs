//! Tests for value parsing: literal classification, decoding, and the
//! composite list and input object forms.

use crate::ast::Value;
use crate::tests::ast_utils::extract_argument_value;
use crate::tests::utils::assert_error_position;
use crate::tests::utils::parse_error;
use crate::NumberDecodeError;
use crate::StringDecodeError;
use crate::SyntaxErrorKind;
use std::error::Error;

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn integers_parse_to_int_values() {
    assert_eq!(extract_argument_value("{ f(x: 42) }"), Value::Int(42));
    assert_eq!(extract_argument_value("{ f(x: 0) }"), Value::Int(0));
}

#[test]
fn signed_integers_keep_their_sign() {
    assert_eq!(extract_argument_value("{ f(x: -7) }"), Value::Int(-7));
    assert_eq!(extract_argument_value("{ f(x: +7) }"), Value::Int(7));
}

#[test]
fn decimals_and_exponents_parse_to_float_values() {
    assert_eq!(extract_argument_value("{ f(x: 3.5) }"), Value::Float(3.5));
    assert_eq!(
        extract_argument_value("{ f(x: 3.14e2) }"),
        Value::Float(314.0)
    );
    assert_eq!(extract_argument_value("{ f(x: 1e-3) }"), Value::Float(0.001));
    assert_eq!(
        extract_argument_value("{ f(x: -2.5E+1) }"),
        Value::Float(-25.0)
    );
}

#[test]
fn extreme_integer_bounds_stay_ints() {
    assert_eq!(
        extract_argument_value("{ f(x: 9223372036854775807) }"),
        Value::Int(i64::MAX)
    );
    assert_eq!(
        extract_argument_value("{ f(x: -9223372036854775808) }"),
        Value::Int(i64::MIN)
    );
}

/// A digit string too large for an `i64` falls back to a float value.
#[test]
fn integer_overflow_becomes_a_float() {
    match extract_argument_value("{ f(x: 9223372036854775808) }") {
        Value::Float(value) => assert_eq!(value, 9223372036854775808_f64),
        other => panic!("Expected a float value, got: {other:?}"),
    }
}

/// A literal beyond the `f64` range never reaches the tree; an infinity
/// would print as `inf`, which does not read back as a number.
#[test]
fn float_overflow_is_rejected_at_the_literal() {
    let error = parse_error("{ f(x: 1e999) }");
    assert_eq!(error.message(), "invalid number literal `1e999`");
    assert_error_position(&error, 1, 8);
    match error.kind() {
        SyntaxErrorKind::InvalidNumberLiteral(NumberDecodeError::Overflow { literal }) => {
            assert_eq!(literal, "1e999");
        }
        other => panic!("Expected an InvalidNumberLiteral kind, got: {other:?}"),
    }

    let error = parse_error("{ f(x: -1e999) }");
    assert_eq!(error.message(), "invalid number literal `-1e999`");
    assert_error_position(&error, 1, 8);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn strings_are_decoded() {
    assert_eq!(
        extract_argument_value("{ f(x: \"hi\") }"),
        Value::Str("hi".to_string())
    );
}

#[test]
fn string_escapes_are_resolved() {
    assert_eq!(
        extract_argument_value(r#"{ f(x: "a\nb\t\"c\"") }"#),
        Value::Str("a\nb\t\"c\"".to_string())
    );
}

#[test]
fn unicode_escapes_are_resolved() {
    assert_eq!(
        extract_argument_value(r#"{ f(x: "\u0041\u00e9") }"#),
        Value::Str("Aé".to_string())
    );
}

/// Raw newlines are allowed inside string literals.
#[test]
fn strings_may_span_lines() {
    assert_eq!(
        extract_argument_value("{ f(x: \"a\nb\") }"),
        Value::Str("a\nb".to_string())
    );
}

// =============================================================================
// Booleans, enums, and variables
// =============================================================================

#[test]
fn booleans_parse_to_bool_values() {
    assert_eq!(extract_argument_value("{ f(x: true) }"), Value::Bool(true));
    assert_eq!(
        extract_argument_value("{ f(x: false) }"),
        Value::Bool(false)
    );
}

#[test]
fn bare_names_parse_to_enum_values() {
    assert_eq!(
        extract_argument_value("{ f(x: ASC) }"),
        Value::Enum("ASC".to_string())
    );
}

#[test]
fn dollar_names_parse_to_variable_values() {
    assert_eq!(
        extract_argument_value("{ f(x: $id) }"),
        Value::Variable("id".to_string())
    );
}

// =============================================================================
// Lists and input objects
// =============================================================================

#[test]
fn lists_may_be_empty() {
    assert_eq!(extract_argument_value("{ f(x: []) }"), Value::List(Vec::new()));
}

#[test]
fn lists_nest_and_mix_value_forms() {
    assert_eq!(
        extract_argument_value("{ f(x: [1, [true], $v, \"s\"]) }"),
        Value::List(vec![
            Value::Int(1),
            Value::List(vec![Value::Bool(true)]),
            Value::Variable("v".to_string()),
            Value::Str("s".to_string()),
        ])
    );
}

#[test]
fn input_objects_keep_fields_in_source_order() {
    assert_eq!(
        extract_argument_value("{ f(x: {b: 2, a: 1}) }"),
        Value::InputObject(vec![
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(1)),
        ])
    );
}

#[test]
fn input_objects_nest() {
    assert_eq!(
        extract_argument_value("{ f(x: {outer: {inner: [1]}}) }"),
        Value::InputObject(vec![(
            "outer".to_string(),
            Value::InputObject(vec![("inner".to_string(), Value::List(vec![Value::Int(1)]))]),
        )])
    );
}

/// Field names repeat freely; the tree records what was written.
#[test]
fn input_object_field_names_are_not_deduplicated() {
    assert_eq!(
        extract_argument_value("{ f(x: {a: 1, a: 2}) }"),
        Value::InputObject(vec![
            ("a".to_string(), Value::Int(1)),
            ("a".to_string(), Value::Int(2)),
        ])
    );
}

// =============================================================================
// Rejected value forms
// =============================================================================

/// `null` is not part of the value grammar.
#[test]
fn null_is_not_a_value() {
    let error = parse_error("{ f(x: null) }");
    assert_eq!(error.message(), "invalid Value");
    assert_error_position(&error, 1, 8);
}

#[test]
fn keywords_are_not_enum_values() {
    let error = parse_error("{ f(x: on) }");
    assert_eq!(error.message(), "invalid Value");
}

#[test]
fn a_dollar_needs_a_variable_name() {
    let error = parse_error("{ f(x: $) }");
    assert_eq!(error.message(), "expected name, found `)`");
    assert_error_position(&error, 1, 9);
}

#[test]
fn unterminated_lists_point_back_at_the_bracket() {
    let error = parse_error("{ f(x: [1, 2 }");
    assert_eq!(error.message(), "expected `]`, found `}`");
    assert_error_position(&error, 1, 14);
    let note = match error.notes().first() {
        Some(note) => note,
        None => panic!("Expected a note on the error: {error:?}"),
    };
    assert_eq!(note.message(), "list opened here");
    match note.location() {
        Some(location) => assert_eq!((location.line(), location.column()), (1, 8)),
        None => panic!("Expected the note to carry a location"),
    }
}

#[test]
fn unterminated_input_objects_point_back_at_the_brace() {
    let error = parse_error("{ f(x: {a: 1 ) }");
    assert_eq!(error.message(), "expected `}`, found `)`");
    assert_error_position(&error, 1, 14);
    let note = match error.notes().first() {
        Some(note) => note,
        None => panic!("Expected a note on the error: {error:?}"),
    };
    assert_eq!(note.message(), "input object opened here");
    match note.location() {
        Some(location) => assert_eq!((location.line(), location.column()), (1, 8)),
        None => panic!("Expected the note to carry a location"),
    }
}

#[test]
fn input_objects_use_colons() {
    let error = parse_error("{ f(x: {a 1}) }");
    assert_eq!(error.message(), "expected `:`, found number");
    assert_error_position(&error, 1, 11);
}

/// Lists may be empty but input objects need at least one field.
#[test]
fn empty_input_objects_are_rejected() {
    let error = parse_error("{ f(x: {}) }");
    assert_eq!(error.message(), "expected name, found `}`");
    assert_error_position(&error, 1, 9);
}

/// The scanner accepts any 4-hex-digit `\u` escape; decoding rejects
/// surrogate code points, and the decoder failure stays reachable through
/// the error's cause chain.
#[test]
fn surrogate_unicode_escapes_fail_decoding() {
    let error = parse_error(r#"{ f(x: "\uD800") }"#);
    assert_eq!(
        error.message(),
        "invalid string literal: \\u escape names the invalid code point U+D800"
    );
    assert_error_position(&error, 1, 8);
    match error.kind() {
        SyntaxErrorKind::InvalidStringLiteral(StringDecodeError::InvalidCodePoint { value }) => {
            assert_eq!(*value, 0xD800);
        }
        other => panic!("Expected an InvalidStringLiteral kind, got: {other:?}"),
    }
    let cause = error
        .source()
        .and_then(|kind| kind.source())
        .and_then(|cause| cause.downcast_ref::<StringDecodeError>());
    assert_eq!(
        cause,
        Some(&StringDecodeError::InvalidCodePoint { value: 0xD800 })
    );
}
