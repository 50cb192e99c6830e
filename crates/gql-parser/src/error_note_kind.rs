/// The kind of an [`ErrorNote`](crate::ErrorNote), controlling how the note
/// is labeled in detailed error output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorNoteKind {
    /// Additional context about the error.
    General,
    /// A suggested fix.
    Help,
}

impl ErrorNoteKind {
    /// The label used when rendering a note of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorNoteKind::General => "note",
            ErrorNoteKind::Help => "help",
        }
    }
}
