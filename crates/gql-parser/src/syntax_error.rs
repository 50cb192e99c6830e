use crate::ErrorNote;
use crate::ErrorNotes;
use crate::Location;
use crate::SyntaxErrorKind;

/// A scan or parse error with location information and contextual notes.
///
/// This structure provides comprehensive error information for both
/// human-readable CLI output and programmatic handling by tools.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SyntaxError {
    /// Human-readable primary error message.
    ///
    /// This is the main error description shown to users.
    /// Examples: "expected `:`, found name", "unterminated string literal"
    message: String,

    /// The location where the error was detected.
    ///
    /// - For "expected X, found Y" errors: the offending token's position
    /// - For scan errors: the start of the offending token or character
    location: Location,

    /// Categorized error kind for programmatic handling.
    ///
    /// Enables tools to pattern-match on error types without parsing
    /// messages. Doubles as the error's `source()`, carrying wrapped
    /// decoder failures through the standard cause chain.
    #[source]
    kind: SyntaxErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    ///
    /// Each note has a kind (General, Help), message, and optional location:
    /// - With location: points at a related position (e.g. "opened here")
    /// - Without location: general advice not tied to a position
    notes: ErrorNotes,
}

impl SyntaxError {
    /// Creates a new syntax error with no notes.
    pub fn new(message: impl Into<String>, location: Location, kind: SyntaxErrorKind) -> Self {
        Self {
            message: message.into(),
            location,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    /// Creates a new syntax error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        location: Location,
        kind: SyntaxErrorKind,
        notes: ErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            kind,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location where the error was detected.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// Adds a general note without a location.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_at(&mut self, message: impl Into<String>, location: Location) {
        self.notes.push(ErrorNote::general_at(message, location));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found name
    ///   --> query.graphql:5:12
    ///    |
    ///  5 |     user(id 4) { name }
    ///    |             ^
    ///    |
    ///    = help: write arguments as `name: value`
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. If `None`,
    ///   snippets are omitted but line/column info is still shown.
    ///
    /// Snippets index into `source` with the error's own line number, so
    /// they only line up when the document was parsed with start-of-source
    /// coordinates (the usual case for whole files).
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        // Error header
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        // Location line
        let origin = self.location.origin().unwrap_or("<input>");
        output.push_str(&format!(
            "  --> {origin}:{}:{}\n",
            self.location.line(),
            self.location.column()
        ));

        // Source snippet (if source is provided)
        if let Some(src) = source
            && let Some(snippet) = format_source_snippet(src, &self.location)
        {
            output.push_str(&snippet);
        }

        // Notes
        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind().label(),
                note.message()
            ));

            // If the note has a location and we have source, show it too
            if let (Some(note_location), Some(src)) = (note.location(), source)
                && let Some(snippet) = format_note_snippet(src, note_location)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// query.graphql:5:12: error: expected `:`, found name
    /// ```
    pub fn format_oneline(&self) -> String {
        let origin = self.location.origin().unwrap_or("<input>");
        format!(
            "{origin}:{}:{}: error: {}",
            self.location.line(),
            self.location.column(),
            self.message
        )
    }
}

/// Formats the source snippet for the primary error location.
fn format_source_snippet(source: &str, location: &Location) -> Option<String> {
    let line_num = location.line();
    let line_content = line_at(source, line_num)?;
    let line_num_width = line_num.to_string().len().max(2);

    let mut output = String::new();

    // Separator line
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));

    // Source line
    output.push_str(&format!("{line_num:>line_num_width$} | {line_content}\n"));

    // Caret line; columns are 1-based
    output.push_str(&format!(
        "{:>width$} | {:>padding$}^\n",
        "",
        "",
        width = line_num_width,
        padding = location.column().saturating_sub(1)
    ));

    Some(output)
}

/// Formats a source snippet for a note's location.
fn format_note_snippet(source: &str, location: &Location) -> Option<String> {
    let line_num = location.line();
    let line_content = line_at(source, line_num)?;
    let line_num_width = line_num.to_string().len().max(2);

    let mut output = String::new();

    // Source line with line number
    output.push_str(&format!(
        "     {line_num:>line_num_width$} | {line_content}\n"
    ));

    // Marker line
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        width = line_num_width,
        padding = location.column().saturating_sub(1)
    ));

    Some(output)
}

/// Extracts the 1-based `line`-th line of `source`, without its line
/// terminator. Returns `None` when the source has no such line.
fn line_at(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }
    let bytes = source.as_bytes();
    let mut start = 0usize;
    for _ in 1..line {
        let newline = memchr::memchr(b'\n', &bytes[start..])?;
        start += newline + 1;
    }
    if start >= source.len() {
        return None;
    }
    let rest = &source[start..];
    let end = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
    let line_content = &rest[..end];
    Some(line_content.strip_suffix('\r').unwrap_or(line_content))
}
