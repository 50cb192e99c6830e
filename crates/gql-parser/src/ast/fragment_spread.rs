use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A spread of a named fragment into a selection set: `...FragmentName`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        sink.push_str(&self.name);
        append_directives(&self.directives, sink);
    }
}
