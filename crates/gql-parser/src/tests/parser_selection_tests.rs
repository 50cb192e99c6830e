//! Tests for selection parsing: fields, aliases, arguments, directives,
//! fragment spreads, and inline fragments.

use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::Value;
use crate::tests::ast_utils::extract_operation;
use crate::tests::ast_utils::first_argument_value;
use crate::tests::ast_utils::first_field;
use crate::tests::utils::assert_error_position;
use crate::tests::utils::parse_error;
use crate::SyntaxErrorKind;

// =============================================================================
// Fields
// =============================================================================

#[test]
fn parses_nested_selection_sets() {
    let operation = extract_operation("{ a { b { c } } }");
    let a = first_field(&operation.selection_set);
    assert_eq!(a.name, "a");
    let a_selections = match &a.selection_set {
        Some(selection_set) => selection_set,
        None => panic!("Expected `a` to have a selection set"),
    };
    let b = first_field(a_selections);
    assert_eq!(b.name, "b");
    let b_selections = match &b.selection_set {
        Some(selection_set) => selection_set,
        None => panic!("Expected `b` to have a selection set"),
    };
    assert_eq!(first_field(b_selections).name, "c");
}

#[test]
fn leaf_fields_have_no_selection_set() {
    let operation = extract_operation("{ a }");
    assert_eq!(first_field(&operation.selection_set).selection_set, None);
}

#[test]
fn parses_aliases() {
    let operation = extract_operation("{ posts: articles }");
    let field = first_field(&operation.selection_set);
    assert_eq!(field.alias.as_deref(), Some("posts"));
    assert_eq!(field.name, "articles");
}

#[test]
fn parses_arguments_in_order() {
    let operation = extract_operation("{ articles(first: 10, after: \"cursor\") }");
    let field = first_field(&operation.selection_set);
    let names: Vec<_> = field
        .arguments
        .iter()
        .map(|argument| argument.name.as_str())
        .collect();
    assert_eq!(names, vec!["first", "after"]);
}

#[test]
fn parses_an_argument_and_a_nested_set_on_one_field() {
    let operation = extract_operation("{ page(id: 1) { title } }");
    assert_eq!(operation.operation_type, OperationType::Query);
    assert_eq!(operation.name, None);
    let page = first_field(&operation.selection_set);
    assert_eq!(page.name, "page");
    assert_eq!(page.arguments.len(), 1);
    assert_eq!(page.arguments[0].name, "id");
    assert_eq!(first_argument_value(page), &Value::Int(1));
    let children = match &page.selection_set {
        Some(selection_set) => selection_set,
        None => panic!("Expected `page` to have a selection set"),
    };
    let title = first_field(children);
    assert_eq!(title.name, "title");
    assert!(title.arguments.is_empty());
    assert_eq!(title.selection_set, None);
}

#[test]
fn parses_field_directives() {
    let operation = extract_operation("{ a @skip(if: $x) @traced }");
    let field = first_field(&operation.selection_set);
    assert_eq!(field.directives.len(), 2);
    assert_eq!(field.directives[0].name, "skip");
    assert_eq!(field.directives[0].arguments.len(), 1);
    assert_eq!(field.directives[1].name, "traced");
    assert!(field.directives[1].arguments.is_empty());
}

#[test]
fn parses_sibling_selections() {
    let operation = extract_operation("{ a b c }");
    assert_eq!(operation.selection_set.selections.len(), 3);
}

// =============================================================================
// Fragment spreads and inline fragments
// =============================================================================

#[test]
fn parses_a_fragment_spread() {
    let operation = extract_operation("{ ...entry }");
    match &operation.selection_set.selections[0] {
        Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name, "entry");
            assert!(spread.directives.is_empty());
        }
        other => panic!("Expected a fragment spread, got: {other:?}"),
    }
}

#[test]
fn parses_a_fragment_spread_with_directives() {
    let operation = extract_operation("{ ...entry @skip(if: $x) }");
    match &operation.selection_set.selections[0] {
        Selection::FragmentSpread(spread) => {
            assert_eq!(spread.directives.len(), 1);
        }
        other => panic!("Expected a fragment spread, got: {other:?}"),
    }
}

#[test]
fn parses_an_inline_fragment() {
    let operation = extract_operation("{ ... on User { name } }");
    match &operation.selection_set.selections[0] {
        Selection::InlineFragment(fragment) => {
            assert_eq!(fragment.type_condition.as_deref(), Some("User"));
            assert_eq!(fragment.selection_set.selections.len(), 1);
        }
        other => panic!("Expected an inline fragment, got: {other:?}"),
    }
}

#[test]
fn mixes_selection_forms_in_one_set() {
    let operation = extract_operation("{ id ...entry ... on User { name } }");
    let selections = &operation.selection_set.selections;
    assert_eq!(selections.len(), 3);
    assert!(matches!(selections[0], Selection::Field(_)));
    assert!(matches!(selections[1], Selection::FragmentSpread(_)));
    assert!(matches!(selections[2], Selection::InlineFragment(_)));
}

// =============================================================================
// Malformed selections
// =============================================================================

#[test]
fn empty_selection_sets_are_rejected() {
    let error = parse_error("{ }");
    assert_eq!(error.message(), "invalid Selection");
    assert_error_position(&error, 1, 3);
}

/// Keywords are promoted before the parser sees them, so a field cannot be
/// named `query` or `on`.
#[test]
fn keywords_cannot_be_field_names() {
    let error = parse_error("{ query }");
    assert_eq!(error.message(), "invalid Selection");
    assert_error_position(&error, 1, 3);

    let error = parse_error("{ on }");
    assert_eq!(error.message(), "invalid Selection");
}

#[test]
fn a_spread_must_introduce_a_fragment_form() {
    let error = parse_error("{ ... 42 }");
    assert_eq!(error.message(), "invalid Selection");
    assert_error_position(&error, 1, 7);
}

#[test]
fn alias_must_be_followed_by_a_field_name() {
    let error = parse_error("{ a: }");
    assert_eq!(error.message(), "expected name, found `}`");
    assert_error_position(&error, 1, 6);
}

#[test]
fn arguments_require_a_value() {
    let error = parse_error("{ a(x:) }");
    assert_eq!(error.message(), "invalid Value");
    assert_error_position(&error, 1, 7);
}

#[test]
fn unterminated_selection_sets_point_back_at_the_brace() {
    let error = parse_error("{ a { b }");
    assert_eq!(error.message(), "expected `}`, found end of input");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnexpectedEof { .. }
    ));
    let note = match error.notes().first() {
        Some(note) => note,
        None => panic!("Expected a note on the error: {error:?}"),
    };
    assert_eq!(note.message(), "selection set opened here");
    match note.location() {
        Some(location) => assert_eq!((location.line(), location.column()), (1, 1)),
        None => panic!("Expected the note to carry a location"),
    }
}
