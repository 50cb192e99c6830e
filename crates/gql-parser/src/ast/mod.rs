//! The abstract syntax tree produced by [`parse`](crate::parse).
//!
//! Nodes own their data (`String`s and `Vec`s, no borrows into the source)
//! and carry no positions, so two documents that differ only in layout,
//! commas, or comments parse to equal trees. Every node implements
//! [`AstNode`] for canonical source reconstruction.

mod argument;
mod ast_node;
mod definition;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_type;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable_definition::VariableDefinition;
