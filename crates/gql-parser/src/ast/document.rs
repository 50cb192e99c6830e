use crate::ast::AstNode;
use crate::ast::Definition;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A parsed query document: one or more operation or fragment definitions.
///
/// This is the root of the AST returned by [`parse`](crate::parse).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[inherent]
impl AstNode for Document {
    pub fn append_source(&self, sink: &mut String) {
        for (index, definition) in self.definitions.iter().enumerate() {
            if index > 0 {
                sink.push_str("\n\n");
            }
            definition.append_source(sink);
        }
    }
}
