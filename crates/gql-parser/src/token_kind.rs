/// The kind of a [`Token`](crate::Token).
///
/// Keyword kinds (`True` through `Fragment`) are produced by promoting a
/// scanned name whose text matches the keyword exactly; every other
/// identifier-shaped token is a plain [`Name`](TokenKind::Name).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    /// An identifier: `[A-Za-z_][A-Za-z0-9_]*`, excluding keywords.
    Name,
    /// A quoted string literal, including its surrounding quotes.
    Str,
    /// An integer or float literal.
    Number,

    // Keywords
    True,
    False,
    Null,
    Query,
    Mutation,
    On,
    Fragment,

    // Punctuators
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Equals,
    Bang,
    At,
    Dollar,
    /// The spread operator `...`.
    Spread,

    /// A `#` comment, running to the end of the line. Comment tokens are
    /// filtered out by [`Scanner::scan`](crate::Scanner::scan) and never
    /// reach the parser.
    Comment,
    /// End of input. Scanning past the end keeps producing this kind.
    Eof,
}

impl TokenKind {
    /// Returns the keyword kind for `text`, or [`Name`](TokenKind::Name)
    /// when the text is not a keyword.
    pub fn from_name(text: &str) -> TokenKind {
        match text {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            "query" => TokenKind::Query,
            "mutation" => TokenKind::Mutation,
            "on" => TokenKind::On,
            "fragment" => TokenKind::Fragment,
            _ => TokenKind::Name,
        }
    }

    /// A human-readable name for this kind, as used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Name => "name",
            TokenKind::Str => "string",
            TokenKind::Number => "number",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Query => "`query`",
            TokenKind::Mutation => "`mutation`",
            TokenKind::On => "`on`",
            TokenKind::Fragment => "`fragment`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Equals => "`=`",
            TokenKind::Bang => "`!`",
            TokenKind::At => "`@`",
            TokenKind::Dollar => "`$`",
            TokenKind::Spread => "`...`",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        }
    }
}
