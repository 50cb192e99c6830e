use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// One variable declared by an operation: `$name: Type = default`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.var_type.append_source(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink);
        }
    }
}
