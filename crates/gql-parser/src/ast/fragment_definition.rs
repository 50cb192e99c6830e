use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A named fragment definition:
/// `fragment Name on Type { ... }`.
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the GraphQL spec.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub name: String,
    /// The named type after `on` that selections apply to.
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink);
    }
}
