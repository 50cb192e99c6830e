use serde::Deserialize;
use serde::Serialize;

/// The type of an [`OperationDefinition`](crate::ast::OperationDefinition).
///
/// Anonymous shorthand operations (a bare selection set at the top level)
/// are queries.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OperationType {
    Query,
    Mutation,
}

impl OperationType {
    /// The keyword that introduces this operation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
        }
    }
}
