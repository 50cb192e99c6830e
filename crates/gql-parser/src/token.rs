use crate::Location;
use crate::TokenKind;
use std::borrow::Cow;

/// A single lexed token.
///
/// The token's `text` borrows from the source wherever possible; it is only
/// an owned copy when whitespace normalization or line-ending substitution
/// changed a character inside the token's span, so the scanned text no
/// longer matches the raw bytes.
///
/// Position fields describe the token's first character. `pos` is a byte
/// offset and `char_pos` a character offset, both 0-based; `line` and `col`
/// are 1-based (subject to the seed location handed to
/// [`Scanner::new`](crate::Scanner::new)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: Cow<'src, str>,
    pub pos: usize,
    pub char_pos: usize,
    pub line: usize,
    pub col: usize,
    pub origin: Option<&'src str>,
    pub path: Option<&'src str>,
}

impl Token<'_> {
    /// The token's position as an owned [`Location`].
    pub fn location(&self) -> Location {
        Location::at(
            self.origin.map(str::to_string),
            self.path.map(str::to_string),
            self.line,
            self.col,
        )
    }
}
