use crate::ast::AstNode;
use crate::ast::Value;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A named argument to a field or directive: `name: value`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_source(sink);
    }
}
