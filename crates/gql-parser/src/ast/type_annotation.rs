use crate::ast::AstNode;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A type reference in a variable definition: a named type or a list type,
/// either of which may be marked non-null with `!`.
///
/// List types nest arbitrarily: `[[Int!]]!` is a non-null list of lists of
/// non-null `Int`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeAnnotation {
    Named {
        name: String,
        non_null: bool,
    },
    List {
        inner: Box<TypeAnnotation>,
        non_null: bool,
    },
}

impl TypeAnnotation {
    /// Returns `true` when the outermost type carries a `!`.
    pub fn is_non_null(&self) -> bool {
        match self {
            TypeAnnotation::Named { non_null, .. } => *non_null,
            TypeAnnotation::List { non_null, .. } => *non_null,
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            TypeAnnotation::Named { name, non_null } => {
                sink.push_str(name);
                if *non_null {
                    sink.push('!');
                }
            }
            TypeAnnotation::List { inner, non_null } => {
                sink.push('[');
                inner.append_source(sink);
                sink.push(']');
                if *non_null {
                    sink.push('!');
                }
            }
        }
    }
}
