//! Helpers for navigating parsed trees in tests.

use crate::ast::Definition;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::tests::utils::parse_document;

/// Parses `source` and returns its first definition, which must be an
/// operation.
pub fn extract_operation(source: &str) -> OperationDefinition {
    let document = parse_document(source);
    match document.definitions.into_iter().next() {
        Some(Definition::Operation(operation)) => operation,
        other => panic!("Expected an operation definition, got: {other:?}"),
    }
}

/// Parses `source` and returns its first definition, which must be a
/// fragment.
pub fn extract_fragment(source: &str) -> FragmentDefinition {
    let document = parse_document(source);
    match document.definitions.into_iter().next() {
        Some(Definition::Fragment(fragment)) => fragment,
        other => panic!("Expected a fragment definition, got: {other:?}"),
    }
}

/// Returns the first selection of `selection_set`, which must be a field.
pub fn first_field(selection_set: &SelectionSet) -> &Field {
    match selection_set.selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}

/// Returns the value of the first argument of `field`.
pub fn first_argument_value(field: &Field) -> &Value {
    match field.arguments.first() {
        Some(argument) => &argument.value,
        None => panic!("Expected an argument on field `{}`", field.name),
    }
}

/// Parses a one-field query and returns the value of the field's first
/// argument.
pub fn extract_argument_value(source: &str) -> Value {
    let operation = extract_operation(source);
    let field = first_field(&operation.selection_set);
    first_argument_value(field).clone()
}
