use thiserror::Error;

/// Errors produced by [`Buffer`](crate::Buffer) construction and
/// [`Buffer::set_pos`](crate::Buffer::set_pos) when a requested range or
/// position does not fit the underlying source.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BufferRangeError {
    /// `start` is greater than `end`.
    #[error("start index {start} is beyond the end position {end}")]
    StartBeyondEnd { start: usize, end: usize },

    /// `start` points past the last character of the source.
    #[error("start index {start} is greater than the source length {len}")]
    StartBeyondSource { start: usize, len: usize },

    /// `end` points past the end of the source.
    #[error("end position {end} is greater than the source length {len}")]
    EndBeyondSource { end: usize, len: usize },

    /// An index does not fall on a UTF-8 character boundary.
    #[error("index {index} is not a character boundary")]
    NotCharBoundary { index: usize },

    /// A position handed to `set_pos` falls outside the buffer's range.
    #[error("position {pos} is out of bounds ({start}..{end})")]
    PosOutOfBounds {
        pos: usize,
        start: usize,
        end: usize,
    },
}
