use crate::ErrorNoteKind;
use crate::Location;

/// A secondary annotation attached to a [`SyntaxError`](crate::SyntaxError),
/// optionally pointing at a second location (e.g. the opening delimiter of
/// an unclosed pair).
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNote {
    kind: ErrorNoteKind,
    message: String,
    location: Option<Location>,
}

impl ErrorNote {
    /// Creates a general note with no location.
    pub fn general(message: impl Into<String>) -> Self {
        ErrorNote {
            kind: ErrorNoteKind::General,
            message: message.into(),
            location: None,
        }
    }

    /// Creates a general note pointing at `location`.
    pub fn general_at(message: impl Into<String>, location: Location) -> Self {
        ErrorNote {
            kind: ErrorNoteKind::General,
            message: message.into(),
            location: Some(location),
        }
    }

    /// Creates a help note with no location.
    pub fn help(message: impl Into<String>) -> Self {
        ErrorNote {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            location: None,
        }
    }

    pub fn kind(&self) -> ErrorNoteKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}
