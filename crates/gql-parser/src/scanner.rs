use crate::Buffer;
use crate::Location;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::Token;
use crate::TokenKind;
use std::borrow::Cow;

/// A hand-written tokenizer for the GraphQL query language.
///
/// The scanner pulls normalized characters from a [`Buffer`] and groups them
/// into [`Token`]s, tracking line/column coordinates as it goes. Tokens are
/// appended to a growable token arena, which lets [`peek`](Scanner::peek)
/// look arbitrarily far ahead without ever lexing the same text twice:
/// peeked tokens are handed back out by later [`scan`](Scanner::scan) calls
/// in order.
///
/// `scan` and `peek` both skip [`Comment`](TokenKind::Comment) tokens, so
/// the parser above only ever sees meaningful tokens. Once the end of input
/// is reached, every further call yields the same
/// [`Eof`](TokenKind::Eof) token.
///
/// Scanning is fail-fast: the first malformed construct (an unterminated
/// string, a bad escape, a lone `.`) is returned as a located
/// [`SyntaxError`] and the scanner should not be used afterwards.
pub struct Scanner<'src> {
    source: &'src str,
    buffer: Buffer<'src>,
    origin: Option<&'src str>,
    path: Option<&'src str>,

    /// The current lookahead character, not yet part of any token.
    /// `None` once the buffer is exhausted.
    ch: Option<char>,
    /// Byte offset where the current character's source region starts.
    pos: usize,
    /// 0-based character offset of the current character.
    char_pos: usize,
    /// Count of characters read so far.
    char_count: usize,
    line: usize,
    col: usize,

    // Token under construction.
    tok_text: String,
    tok_dirty: bool,
    tok_pos: usize,
    tok_char_pos: usize,
    tok_line: usize,
    tok_col: usize,

    // Token arena and the two cursors walking it.
    tokens: Vec<Token<'src>>,
    cursor: usize,
    peek_cursor: usize,
}

/// A snapshot of the scanner's cursor, used to roll back to the end of a
/// shorter valid token (e.g. emitting `1` when `1.` turns out not to start
/// a float).
struct Marker {
    buffer_pos: usize,
    ch: Option<char>,
    pos: usize,
    char_pos: usize,
    char_count: usize,
    line: usize,
    col: usize,
    text_len: usize,
    dirty: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over the whole of `source`.
    ///
    /// `location` seeds the coordinates of the first character and supplies
    /// the origin/path stamped onto every token, so documents embedded in a
    /// larger file report positions relative to that file. A seed line of
    /// `0` (as in [`Location::NONE`]) starts at line 1.
    pub fn new(source: &'src str, location: &'src Location) -> Self {
        Self::with_buffer(Buffer::from_source(source), location)
    }

    /// Creates a scanner over an existing [`Buffer`] window.
    pub fn with_buffer(buffer: Buffer<'src>, location: &'src Location) -> Self {
        let mut scanner = Scanner {
            source: buffer.source(),
            buffer,
            origin: location.origin(),
            path: location.path(),
            ch: None,
            pos: 0,
            char_pos: 0,
            char_count: 0,
            line: if location.line() == 0 {
                1
            } else {
                location.line()
            },
            col: location.column(),
            tok_text: String::new(),
            tok_dirty: false,
            tok_pos: 0,
            tok_char_pos: 0,
            tok_line: 0,
            tok_col: 0,
            tokens: Vec::new(),
            cursor: 0,
            peek_cursor: 0,
        };
        scanner.advance();
        scanner
    }

    // ================================================================
    // Scanning interface
    // ================================================================

    /// Returns the next non-comment token, lexing more input on demand.
    ///
    /// Also resets the peek cursor, so a following [`peek`](Scanner::peek)
    /// starts right after the token returned here.
    pub fn scan(&mut self) -> Result<Token<'src>, SyntaxError> {
        loop {
            if self.cursor >= self.tokens.len() {
                self.fill_one()?;
            }
            let token = &self.tokens[self.cursor];
            let kind = token.kind;
            let token = token.clone();
            if kind != TokenKind::Eof {
                self.cursor += 1;
            }
            self.peek_cursor = self.cursor;
            if kind == TokenKind::Comment {
                continue;
            }
            return Ok(token);
        }
    }

    /// Returns the next non-comment token after the last peeked one,
    /// without consuming anything. Consecutive calls look further and
    /// further ahead; [`scan`](Scanner::scan) and
    /// [`reset_peek`](Scanner::reset_peek) rewind the lookahead.
    pub fn peek(&mut self) -> Result<Token<'src>, SyntaxError> {
        if self.peek_cursor < self.cursor {
            self.peek_cursor = self.cursor;
        }
        loop {
            if self.peek_cursor >= self.tokens.len() {
                self.fill_one()?;
            }
            let token = &self.tokens[self.peek_cursor];
            let kind = token.kind;
            let token = token.clone();
            if kind != TokenKind::Eof {
                self.peek_cursor += 1;
            }
            if kind == TokenKind::Comment {
                continue;
            }
            return Ok(token);
        }
    }

    /// Rewinds the peek cursor to just after the last scanned token.
    pub fn reset_peek(&mut self) {
        self.peek_cursor = self.cursor;
    }

    /// Lexes one more token into the arena, unless the arena already ends
    /// with [`Eof`](TokenKind::Eof).
    fn fill_one(&mut self) -> Result<(), SyntaxError> {
        if let Some(last) = self.tokens.last()
            && last.kind == TokenKind::Eof
        {
            return Ok(());
        }
        let token = self.next_token()?;
        self.tokens.push(token);
        Ok(())
    }

    // ================================================================
    // Lexing
    // ================================================================

    /// Skips insignificant characters and lexes the next token.
    fn next_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        // Commas are insignificant, like all whitespace.
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r' | ',')) {
            self.advance();
        }

        self.tok_pos = self.pos;
        self.tok_char_pos = self.char_pos;
        self.tok_line = self.line;
        self.tok_col = self.col;
        self.tok_text.clear();
        self.tok_dirty = false;

        match self.ch {
            None => Ok(self.make_token(TokenKind::Eof)),
            Some(ch) if ch == '_' || ch.is_ascii_alphabetic() => Ok(self.lex_name()),
            Some(ch) if ch.is_ascii_digit() || ch == '+' || ch == '-' => self.lex_number(),
            Some('"') => self.lex_string(),
            Some('.') => self.lex_spread(),
            Some('#') => Ok(self.lex_comment()),
            Some('{') => Ok(self.lex_punctuator(TokenKind::LBrace)),
            Some('}') => Ok(self.lex_punctuator(TokenKind::RBrace)),
            Some('(') => Ok(self.lex_punctuator(TokenKind::LParen)),
            Some(')') => Ok(self.lex_punctuator(TokenKind::RParen)),
            Some('[') => Ok(self.lex_punctuator(TokenKind::LBracket)),
            Some(']') => Ok(self.lex_punctuator(TokenKind::RBracket)),
            Some(':') => Ok(self.lex_punctuator(TokenKind::Colon)),
            Some('=') => Ok(self.lex_punctuator(TokenKind::Equals)),
            Some('!') => Ok(self.lex_punctuator(TokenKind::Bang)),
            Some('@') => Ok(self.lex_punctuator(TokenKind::At)),
            Some('$') => Ok(self.lex_punctuator(TokenKind::Dollar)),
            Some(found) => Err(self.error_at_current(
                format!("unexpected character `{found}`"),
                SyntaxErrorKind::UnexpectedCharacter { found },
            )),
        }
    }

    /// Lexes a name, promoting it to a keyword kind when the text matches.
    fn lex_name(&mut self) -> Token<'src> {
        self.add_ch();
        while matches!(self.ch, Some(ch) if ch == '_' || ch.is_ascii_alphanumeric()) {
            self.add_ch();
        }
        let kind = TokenKind::from_name(&self.tok_text);
        self.make_token(kind)
    }

    /// Lexes an integer or float literal.
    ///
    /// A trailing `.` with no digit after it is not part of the number: the
    /// scanner rolls back and emits the integer seen so far, leaving the
    /// dot for the next token (where it will fail as an incomplete spread).
    fn lex_number(&mut self) -> Result<Token<'src>, SyntaxError> {
        if matches!(self.ch, Some('+' | '-')) {
            self.add_ch();
            if !matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
                return Err(self.error_at_token_start(
                    "malformed number: expected a digit after the sign",
                    SyntaxErrorKind::MalformedNumber,
                ));
            }
        }
        while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
            self.add_ch();
        }

        if self.ch == Some('.') {
            let marker = self.mark();
            self.add_ch();
            if matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
                while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
                    self.add_ch();
                }
            } else {
                self.restore(marker);
                return Ok(self.make_token(TokenKind::Number));
            }
        }

        if matches!(self.ch, Some('e' | 'E')) {
            self.add_ch();
            if matches!(self.ch, Some('+' | '-')) {
                self.add_ch();
            }
            if !matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
                return Err(self.error_at_token_start(
                    "malformed number: exponent has no digits",
                    SyntaxErrorKind::MalformedNumber,
                ));
            }
            while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
                self.add_ch();
            }
        }

        Ok(self.make_token(TokenKind::Number))
    }

    /// Lexes a string literal. The token text keeps the surrounding quotes
    /// and all escape sequences verbatim; decoding happens later in
    /// [`decode_string`](crate::decode_string).
    fn lex_string(&mut self) -> Result<Token<'src>, SyntaxError> {
        self.add_ch();
        loop {
            match self.ch {
                None => return Err(self.unterminated_string_error()),
                Some('"') => {
                    self.add_ch();
                    return Ok(self.make_token(TokenKind::Str));
                }
                Some('\\') => {
                    self.add_ch();
                    match self.ch {
                        None => return Err(self.unterminated_string_error()),
                        Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => self.add_ch(),
                        Some('u') => {
                            self.add_ch();
                            for _ in 0..4 {
                                match self.ch {
                                    Some(ch) if ch.is_ascii_hexdigit() => self.add_ch(),
                                    Some(found) => {
                                        return Err(self.error_at_current(
                                            format!(
                                                "invalid escape sequence: expected four hex \
                                                 digits after `\\u`, found `{found}`"
                                            ),
                                            SyntaxErrorKind::InvalidEscape { found },
                                        ));
                                    }
                                    None => return Err(self.unterminated_string_error()),
                                }
                            }
                        }
                        Some(found) => {
                            let mut error = self.error_at_current(
                                format!("invalid escape sequence `\\{found}`"),
                                SyntaxErrorKind::InvalidEscape { found },
                            );
                            error.add_help(
                                "valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX",
                            );
                            return Err(error);
                        }
                    }
                }
                Some(_) => self.add_ch(),
            }
        }
    }

    /// Lexes the `...` spread operator.
    fn lex_spread(&mut self) -> Result<Token<'src>, SyntaxError> {
        self.add_ch();
        for _ in 0..2 {
            if self.ch == Some('.') {
                self.add_ch();
            } else {
                let mut error = self.error_at_token_start(
                    "incomplete `...` spread operator",
                    SyntaxErrorKind::IncompleteSpread,
                );
                error.add_help("spreads are written as `...` with nothing between the dots");
                return Err(error);
            }
        }
        Ok(self.make_token(TokenKind::Spread))
    }

    /// Lexes a `#` comment running to the end of the line. The line break
    /// itself is not part of the token.
    fn lex_comment(&mut self) -> Token<'src> {
        while !matches!(self.ch, None | Some('\n' | '\r')) {
            self.add_ch();
        }
        self.make_token(TokenKind::Comment)
    }

    fn lex_punctuator(&mut self, kind: TokenKind) -> Token<'src> {
        self.add_ch();
        self.make_token(kind)
    }

    // ================================================================
    // Cursor helpers
    // ================================================================

    /// Moves to the next character, updating position and line/column
    /// bookkeeping.
    ///
    /// A `\r` not followed by `\n` is presented as `\n`, so consumers only
    /// ever deal with one line-break character; in a `\r\n` pair the `\r`
    /// passes through and the `\n` breaks the line.
    fn advance(&mut self) {
        self.pos = self.buffer.pos();
        self.ch = self.buffer.read();
        self.col += 1;
        self.char_pos = self.char_count;
        self.char_count += 1;
        if self.ch == Some('\r') && self.buffer.peek() != Some('\n') {
            self.ch = Some('\n');
        }
        if self.ch == Some('\n') {
            self.line += 1;
            self.col = 0;
        }
    }

    /// Appends the current character to the token under construction and
    /// advances past it.
    fn add_ch(&mut self) {
        if let Some(ch) = self.ch {
            // When normalization dropped or rewrote bytes inside the span,
            // the token text can no longer be borrowed from the source.
            let consumed = self.buffer.pos() - self.pos;
            if consumed != ch.len_utf8()
                || (ch == '\n' && self.source.as_bytes().get(self.pos) != Some(&b'\n'))
            {
                self.tok_dirty = true;
            }
            self.tok_text.push(ch);
            self.advance();
        }
    }

    /// Finishes the token under construction.
    fn make_token(&mut self, kind: TokenKind) -> Token<'src> {
        let source = self.source;
        let text = if self.tok_dirty {
            Cow::Owned(std::mem::take(&mut self.tok_text))
        } else {
            Cow::Borrowed(&source[self.tok_pos..self.pos])
        };
        Token {
            kind,
            text,
            pos: self.tok_pos,
            char_pos: self.tok_char_pos,
            line: self.tok_line,
            col: self.tok_col,
            origin: self.origin,
            path: self.path,
        }
    }

    fn mark(&self) -> Marker {
        Marker {
            buffer_pos: self.buffer.pos(),
            ch: self.ch,
            pos: self.pos,
            char_pos: self.char_pos,
            char_count: self.char_count,
            line: self.line,
            col: self.col,
            text_len: self.tok_text.len(),
            dirty: self.tok_dirty,
        }
    }

    fn restore(&mut self, marker: Marker) {
        self.buffer.rewind(marker.buffer_pos);
        self.ch = marker.ch;
        self.pos = marker.pos;
        self.char_pos = marker.char_pos;
        self.char_count = marker.char_count;
        self.line = marker.line;
        self.col = marker.col;
        self.tok_text.truncate(marker.text_len);
        self.tok_dirty = marker.dirty;
    }

    // ================================================================
    // Error helpers
    // ================================================================

    fn location_at(&self, line: usize, col: usize) -> Location {
        Location::at(
            self.origin.map(str::to_string),
            self.path.map(str::to_string),
            line,
            col,
        )
    }

    /// Builds an error pointing at the current character.
    fn error_at_current(&self, message: impl Into<String>, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(message, self.location_at(self.line, self.col), kind)
    }

    /// Builds an error pointing at the start of the token under
    /// construction.
    fn error_at_token_start(
        &self,
        message: impl Into<String>,
        kind: SyntaxErrorKind,
    ) -> SyntaxError {
        SyntaxError::new(message, self.location_at(self.tok_line, self.tok_col), kind)
    }

    fn unterminated_string_error(&self) -> SyntaxError {
        let mut error = self.error_at_token_start(
            "unterminated string literal",
            SyntaxErrorKind::UnterminatedString,
        );
        error.add_help("terminate the string with `\"`");
        error
    }
}
