use crate::ErrorNote;
use crate::SmallVec;

/// The collection of [`ErrorNote`]s on a
/// [`SyntaxError`](crate::SyntaxError). Errors rarely carry more than two
/// notes, so the first two live inline.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
