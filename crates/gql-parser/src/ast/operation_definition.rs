use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A query or mutation operation.
///
/// Anonymous shorthand operations (`{ field }`) parse to an unnamed query
/// with no variable definitions and no directives, and print back in the
/// shorthand form.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

impl OperationDefinition {
    /// Returns `true` when this operation would be written in the anonymous
    /// shorthand form (a bare selection set).
    pub fn is_shorthand(&self) -> bool {
        self.operation_type == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_source(&self, sink: &mut String) {
        if self.is_shorthand() {
            self.selection_set.append_source(sink);
            return;
        }
        sink.push_str(self.operation_type.as_str());
        if let Some(name) = &self.name {
            sink.push(' ');
            sink.push_str(name);
        }
        if !self.variable_definitions.is_empty() {
            if self.name.is_none() {
                sink.push(' ');
            }
            sink.push('(');
            for (index, variable_definition) in self.variable_definitions.iter().enumerate() {
                if index > 0 {
                    sink.push_str(", ");
                }
                variable_definition.append_source(sink);
            }
            sink.push(')');
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink);
    }
}
