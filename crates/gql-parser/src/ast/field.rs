use crate::ast::ast_node::append_arguments;
use crate::ast::ast_node::append_directives;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A field selection, optionally aliased:
/// `alias: name(arguments) @directives { selections }`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    /// Present for composite fields that select into their result.
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field's value appears under in a response: the alias
    /// when one is given, the field name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_source(&self, sink: &mut String) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
        append_directives(&self.directives, sink);
        if let Some(selection_set) = &self.selection_set {
            sink.push(' ');
            selection_set.append_source(sink);
        }
    }
}
