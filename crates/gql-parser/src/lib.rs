//! A hand-written lexer and recursive-descent parser for the GraphQL
//! query language.
//!
//! The pipeline has three layers:
//!
//! - [`Buffer`]: a bounded character cursor that normalizes Unicode
//!   whitespace and line endings as it reads.
//! - [`Scanner`]: a tokenizer that groups characters into [`Token`]s,
//!   tracks line/column coordinates, buffers tokens in a growable arena
//!   for arbitrarily-deep [`peek`](Scanner::peek), and filters comments.
//! - [`Parser`]: a recursive-descent parser with one token of lookahead
//!   that builds the owned AST in [`ast`].
//!
//! The usual entry point is [`parse`], which strings the layers together:
//!
//! ```
//! use gql_parser::parse;
//! use gql_parser::Location;
//!
//! let document = parse(&Location::NONE, "{ user: author { name } }")?;
//! assert_eq!(document.definitions.len(), 1);
//! # Ok::<(), gql_parser::SyntaxError>(())
//! ```
//!
//! Parsing is fail-fast: the first lexical or grammatical problem aborts
//! the parse with a [`SyntaxError`] carrying a [`Location`], a structured
//! [`SyntaxErrorKind`], and optional notes, renderable as a one-line
//! summary or a rustc-style annotated snippet.

pub mod ast;
mod buffer;
mod buffer_range_error;
mod error_note;
mod error_note_kind;
mod error_notes;
mod location;
mod number_decode_error;
mod parser;
mod scanner;
mod string_decode_error;
mod syntax_error;
mod syntax_error_kind;
mod token;
mod token_kind;
pub mod utils;

pub use buffer::Buffer;
pub use buffer_range_error::BufferRangeError;
pub use error_note::ErrorNote;
pub use error_note_kind::ErrorNoteKind;
pub use error_notes::ErrorNotes;
pub use location::Location;
pub use number_decode_error::NumberDecodeError;
pub use parser::Parser;
pub use parser::DEFAULT_RECURSION_LIMIT;
pub use scanner::Scanner;
pub use string_decode_error::StringDecodeError;
pub use syntax_error::SyntaxError;
pub use syntax_error_kind::SyntaxErrorKind;
pub use token::Token;
pub use token_kind::TokenKind;
pub use utils::classify_number;
pub use utils::decode_string;
pub use utils::parse;
pub use utils::NumberLiteral;

// Re-exported so downstream code can build `ErrorNotes` values without
// depending on smallvec directly.
pub use smallvec::smallvec;
pub use smallvec::SmallVec;

#[cfg(test)]
mod tests;
