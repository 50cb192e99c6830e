use crate::ast::ast_node::append_arguments;
use crate::ast::Argument;
use crate::ast::AstNode;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A directive annotation: `@name(arguments)`.
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// in the GraphQL spec.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}

#[inherent]
impl AstNode for Directive {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
    }
}
