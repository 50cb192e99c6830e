use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A top-level definition in a [`Document`](crate::ast::Document).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[inherent]
impl AstNode for Definition {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Definition::Operation(operation) => operation.append_source(sink),
            Definition::Fragment(fragment) => fragment.append_source(sink),
        }
    }
}
