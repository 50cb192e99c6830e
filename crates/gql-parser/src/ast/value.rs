use crate::ast::AstNode;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A literal or variable value, as used in arguments and variable
/// defaults.
///
/// Number literals are split at parse time into [`Int`](Value::Int) and
/// [`Float`](Value::Float) by [`classify_number`](crate::classify_number);
/// integers that overflow `i64` land in `Float`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A decoded string: escape sequences have already been resolved.
    Str(String),
    /// A bare name used as an enum value.
    Enum(String),
    /// A reference to an operation variable: `$name`.
    Variable(String),
    List(Vec<Value>),
    /// Input object fields in source order. Field names are not
    /// deduplicated.
    InputObject(Vec<(String, Value)>),
}

#[inherent]
impl AstNode for Value {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Value::Bool(value) => {
                sink.push_str(if *value { "true" } else { "false" });
            }
            Value::Int(value) => {
                sink.push_str(&value.to_string());
            }
            Value::Float(value) => {
                // `{:?}` renders every finite value with a `.` or
                // exponent, so the text reads back as a float rather than
                // an int. Parsing never produces non-finite values;
                // number classification rejects overflowing literals.
                sink.push_str(&format!("{value:?}"));
            }
            Value::Str(value) => {
                append_quoted(value, sink);
            }
            Value::Enum(name) => {
                sink.push_str(name);
            }
            Value::Variable(name) => {
                sink.push('$');
                sink.push_str(name);
            }
            Value::List(items) => {
                sink.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        sink.push_str(", ");
                    }
                    item.append_source(sink);
                }
                sink.push(']');
            }
            Value::InputObject(fields) => {
                sink.push('{');
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        sink.push_str(", ");
                    }
                    sink.push_str(name);
                    sink.push_str(": ");
                    value.append_source(sink);
                }
                sink.push('}');
            }
        }
    }
}

/// Appends `value` as a quoted string literal, escaping characters that
/// cannot appear raw.
fn append_quoted(value: &str, sink: &mut String) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                sink.push_str(&format!("\\u{:04X}", ch as u32));
            }
            ch => sink.push(ch),
        }
    }
    sink.push('"');
}
