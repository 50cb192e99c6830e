use crate::ast::AstNode;
use crate::ast::Selection;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// The set of fields and fragments selected within braces `{ ... }`.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the GraphQL spec.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('{');
        for selection in &self.selections {
            sink.push(' ');
            selection.append_source(sink);
        }
        sink.push_str(" }");
    }
}
