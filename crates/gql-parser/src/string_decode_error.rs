use thiserror::Error;

/// Errors produced by [`decode_string`](crate::decode_string).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StringDecodeError {
    /// The literal is not wrapped in double quotes.
    #[error("string literal is not surrounded by `\"` quotes")]
    NotQuoted,

    /// A `\u` escape is not followed by four hex digits.
    #[error("illegal \\u escape sequence")]
    IllegalUnicodeEscape,

    /// A `\u` escape names a code point that is not a Unicode scalar value
    /// (a surrogate).
    #[error("\\u escape names the invalid code point U+{value:04X}")]
    InvalidCodePoint { value: u32 },
}
