use serde::Deserialize;
use serde::Serialize;

/// A point in query source text: where the text came from (`origin`), an
/// optional logical `path` within a containing document, and a line/column
/// pair.
///
/// `Location` is an immutable value type with structural equality. It is
/// attached to every [`Token`](crate::Token) and [`SyntaxError`](crate::SyntaxError),
/// and passed to [`parse`](crate::parse) to seed the coordinates of documents
/// embedded in larger files.
///
/// # Coordinate Convention
///
/// - `line` is 1-based; `0` means "unknown" (as in [`Location::NONE`]).
/// - `column` is 1-based for scanned tokens; `0` means "unknown" or
///   "before the first character" when used as a seed.
///
/// Line and column only count as present when both are non-zero; see
/// [`has_value`](Location::has_value).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Location {
    origin: Option<String>,
    path: Option<String>,
    line: usize,
    column: usize,
}

impl Location {
    /// The empty location: no origin, no path, no position.
    pub const NONE: Location = Location {
        origin: None,
        path: None,
        line: 0,
        column: 0,
    };

    /// Creates a location at the start of a source (line 1, column 0).
    #[inline]
    pub fn new(origin: Option<String>, path: Option<String>) -> Self {
        Location {
            origin,
            path,
            line: 1,
            column: 0,
        }
    }

    /// Creates a location with explicit coordinates.
    #[inline]
    pub fn at(
        origin: Option<String>,
        path: Option<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Location {
            origin,
            path,
            line,
            column,
        }
    }

    /// The source origin (e.g. a filename or URL), if known.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The logical path within a containing document, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// 1-based line number; `0` when unknown.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number; `0` when unknown.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns `true` iff any field is non-default: an origin or path is
    /// present, or line and column are both non-zero.
    pub fn has_value(&self) -> bool {
        self.origin.is_some() || self.path.is_some() || (self.line != 0 && self.column != 0)
    }

    /// Returns a new location with `suffix` appended to the path.
    ///
    /// The result keeps the origin and resets line/column to the
    /// start-of-source defaults (line 1, column 0), since the appended path
    /// names a nested context rather than a position inside this one.
    pub fn append_path(&self, suffix: &str) -> Location {
        let path = match &self.path {
            Some(path) => format!("{path}{suffix}"),
            None => suffix.to_string(),
        };
        Location::new(self.origin.clone(), Some(path))
    }
}

impl std::fmt::Display for Location {
    /// Renders `"origin, path, line L, column C"`, omitting absent parts.
    /// The empty location renders as the empty string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut wrote = false;
        if let Some(origin) = &self.origin {
            f.write_str(origin)?;
            wrote = true;
        }
        if let Some(path) = &self.path {
            if wrote {
                f.write_str(", ")?;
            }
            f.write_str(path)?;
            wrote = true;
        }
        if self.line != 0 && self.column != 0 {
            if wrote {
                f.write_str(", ")?;
            }
            write!(f, "line {}, column {}", self.line, self.column)?;
        }
        Ok(())
    }
}
