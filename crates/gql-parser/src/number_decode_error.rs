use thiserror::Error;

/// Errors produced by [`classify_number`](crate::classify_number).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NumberDecodeError {
    /// The literal parses as neither an integer nor a float.
    #[error("malformed number literal `{literal}`")]
    Malformed { literal: String },

    /// The literal is float-shaped but its value has no finite `f64`
    /// representation.
    #[error("number literal `{literal}` overflows the `f64` range")]
    Overflow { literal: String },
}
