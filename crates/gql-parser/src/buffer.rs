use crate::BufferRangeError;

/// A bounded cursor over a window of query source text that normalizes
/// Unicode whitespace as it reads.
///
/// The buffer exposes characters one at a time through [`read`](Buffer::read),
/// mapping exotic space characters to a plain ASCII space and dropping
/// invisible formatting characters entirely, so the
/// [`Scanner`](crate::Scanner) above it only ever sees a simplified
/// character stream.
///
/// Positions are byte offsets into the original source and always fall on
/// UTF-8 character boundaries.
#[derive(Clone, Debug)]
pub struct Buffer<'src> {
    source: &'src str,
    start: usize,
    end: usize,
    current: usize,
}

impl<'src> Buffer<'src> {
    /// Creates a buffer over `source[start..end]`.
    ///
    /// Returns an error when the range is inverted, extends past the source,
    /// or either bound splits a UTF-8 character.
    pub fn new(source: &'src str, start: usize, end: usize) -> Result<Self, BufferRangeError> {
        if start > end {
            return Err(BufferRangeError::StartBeyondEnd { start, end });
        }
        if start != end && start >= source.len() {
            return Err(BufferRangeError::StartBeyondSource {
                start,
                len: source.len(),
            });
        }
        if end > source.len() {
            return Err(BufferRangeError::EndBeyondSource {
                end,
                len: source.len(),
            });
        }
        if !source.is_char_boundary(start) {
            return Err(BufferRangeError::NotCharBoundary { index: start });
        }
        if !source.is_char_boundary(end) {
            return Err(BufferRangeError::NotCharBoundary { index: end });
        }
        Ok(Buffer {
            source,
            start,
            end,
            current: start,
        })
    }

    /// Creates a buffer over the whole of `source`. Never fails: the full
    /// range of a `&str` is always a valid window.
    #[inline]
    pub fn from_source(source: &'src str) -> Self {
        Buffer {
            source,
            start: 0,
            end: source.len(),
            current: 0,
        }
    }

    /// Reads the next character, advancing the cursor. Returns `None` once
    /// the cursor reaches the end of the window.
    ///
    /// Space-like characters are returned as `' '` and invisible formatting
    /// characters are skipped.
    pub fn read(&mut self) -> Option<char> {
        while self.current < self.end {
            let ch = self.source[self.current..].chars().next()?;
            self.current += ch.len_utf8();
            match normalized(ch) {
                Normalized::Keep(ch) => return Some(ch),
                Normalized::Skip => continue,
            }
        }
        None
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&mut self) -> Option<char> {
        let saved = self.current;
        let ch = self.read();
        self.current = saved;
        ch
    }

    /// The cursor's byte offset into the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.current
    }

    /// The full underlying source, ignoring the window bounds.
    #[inline]
    pub(crate) fn source(&self) -> &'src str {
        self.source
    }

    /// Moves the cursor to `pos`.
    ///
    /// `pos` must lie within `start..end` and fall on a character boundary.
    pub fn set_pos(&mut self, pos: usize) -> Result<(), BufferRangeError> {
        if pos < self.start || pos >= self.end {
            return Err(BufferRangeError::PosOutOfBounds {
                pos,
                start: self.start,
                end: self.end,
            });
        }
        if !self.source.is_char_boundary(pos) {
            return Err(BufferRangeError::NotCharBoundary { index: pos });
        }
        self.current = pos;
        Ok(())
    }

    /// Restores the cursor to a byte offset previously observed via
    /// [`pos`](Buffer::pos). Unlike [`set_pos`](Buffer::set_pos) this accepts
    /// the end-of-window offset, which `pos` reports after the last read.
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos >= self.start && pos <= self.end);
        debug_assert!(self.source.is_char_boundary(pos));
        self.current = pos;
    }
}

/// The result of normalizing one character.
enum Normalized {
    Keep(char),
    Skip,
}

/// Maps a raw source character to its normalized form.
///
/// Characters that merely render as horizontal space become `' '`, and
/// zero-width formatting characters disappear from the stream. Everything
/// else passes through unchanged, including line breaks.
fn normalized(ch: char) -> Normalized {
    match ch {
        // Space-like characters, mapped to a plain space:
        //   U+00A0 no-break space
        //   U+1680 ogham space mark
        //   U+180E mongolian vowel separator
        //   U+2000..U+200A en quad through hair space
        //   U+202F narrow no-break space
        //   U+205F medium mathematical space
        //   U+3000 ideographic space
        '\u{00A0}' | '\u{1680}' | '\u{180E}' | '\u{2000}'..='\u{200A}' | '\u{202F}'
        | '\u{205F}' | '\u{3000}' => Normalized::Keep(' '),

        // Invisible formatting characters, dropped entirely:
        //   U+00AD soft hyphen
        //   U+1806 mongolian todo soft hyphen
        //   U+200B zero width space
        //   U+200C zero width non-joiner
        //   U+200D zero width joiner
        //   U+2060 word joiner
        '\u{00AD}' | '\u{1806}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' => {
            Normalized::Skip
        }

        _ => Normalized::Keep(ch),
    }
}
