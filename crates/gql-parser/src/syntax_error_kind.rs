use crate::NumberDecodeError;
use crate::StringDecodeError;

/// A structured classification of a [`SyntaxError`](crate::SyntaxError),
/// for callers that need to react to specific failures rather than match on
/// message text.
///
/// The `#[error(...)]` messages are concise/programmatic; full
/// human-readable messages live in `SyntaxError.message`. The kind is also
/// the error's [`source`](std::error::Error::source), so decoder failures
/// wrapped in [`InvalidStringLiteral`](SyntaxErrorKind::InvalidStringLiteral)
/// / [`InvalidNumberLiteral`](SyntaxErrorKind::InvalidNumberLiteral) stay
/// reachable through the standard cause chain.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// The scanner hit a character that cannot start any token.
    #[error("unexpected character: `{found}`")]
    UnexpectedCharacter { found: char },

    /// Input ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A backslash escape inside a string literal is not one of the
    /// recognized sequences.
    #[error("invalid escape: `\\{found}`")]
    InvalidEscape { found: char },

    /// A number literal broke off mid-way (e.g. a sign or exponent marker
    /// with no digits after it).
    #[error("malformed number literal")]
    MalformedNumber,

    /// A `.` was not followed by two more `.` to complete the spread
    /// operator.
    #[error("incomplete `...` operator")]
    IncompleteSpread,

    /// The parser required one specific token and found another.
    #[error("unexpected token: `{found}`")]
    UnexpectedToken { expected: String, found: String },

    /// The parser required another token but the input ended.
    #[error("unexpected end of input")]
    UnexpectedEof { expected: String },

    /// No alternative of a grammar production matched the lookahead token.
    /// `construct` names the production, e.g. `"Definition"`.
    #[error("invalid construct: `{construct}`")]
    InvalidConstruct { construct: &'static str },

    /// Nesting exceeded the parser's recursion limit.
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: usize },

    /// A string literal could not be decoded.
    #[error("invalid string literal")]
    InvalidStringLiteral(#[source] StringDecodeError),

    /// A number literal could not be decoded.
    #[error("invalid number literal")]
    InvalidNumberLiteral(#[source] NumberDecodeError),
}
