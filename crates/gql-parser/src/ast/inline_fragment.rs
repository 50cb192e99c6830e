use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// An inline fragment: `... on Type { selections }`.
///
/// The parser always records a type condition; the field is optional so
/// that trees for a future condition-less form can be represented. A node
/// without one prints as a bare `...` before its selection set.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink);
    }
}
