//! Literal decoding and the top-level [`parse`] entry point.

use crate::ast::Document;
use crate::Location;
use crate::NumberDecodeError;
use crate::Parser;
use crate::Scanner;
use crate::StringDecodeError;
use crate::SyntaxError;

/// A classified number literal; see [`classify_number`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberLiteral {
    Int(i64),
    Float(f64),
}

/// Parses `source` as a query document.
///
/// `location` seeds the coordinates and origin reported in tokens and
/// errors, which keeps positions meaningful when the document is embedded
/// in a larger file. Pass [`&Location::NONE`](Location::NONE) for
/// standalone text; errors then report positions from line 1 with an
/// `<input>` origin.
///
/// ```
/// use gql_parser::ast::Selection;
/// use gql_parser::parse;
/// use gql_parser::Location;
///
/// let document = parse(&Location::NONE, "{ page(id: 1) { title } }")?;
/// let operation = match &document.definitions[0] {
///     gql_parser::ast::Definition::Operation(operation) => operation,
///     _ => unreachable!(),
/// };
/// match &operation.selection_set.selections[0] {
///     Selection::Field(field) => assert_eq!(field.name, "page"),
///     _ => unreachable!(),
/// }
/// # Ok::<(), gql_parser::SyntaxError>(())
/// ```
pub fn parse<'src>(location: &'src Location, source: &'src str) -> Result<Document, SyntaxError> {
    let scanner = Scanner::new(source, location);
    Parser::new(scanner).parse_document()
}

/// Decodes a quoted string literal into its runtime value: strips the
/// surrounding `"` quotes and resolves backslash escapes.
///
/// The decoder accepts a slightly wider escape set than the scanner emits
/// (`\a` and `\v` on top of the scanned `\" \\ \/ \b \f \n \r \t \uXXXX`),
/// and passes unrecognized escapes through as the escaped character, so it
/// is usable on strings from sources other than [`Scanner`].
///
/// `\u` escapes take exactly four hex digits, case-insensitive. Escapes
/// that name a surrogate code point fail, since those are not valid `char`
/// values.
pub fn decode_string(raw: &str) -> Result<String, StringDecodeError> {
    let inner = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StringDecodeError::NotQuoted)?;

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        let Some(escape) = chars.next() else {
            // A trailing lone backslash decodes to nothing.
            break;
        };
        match escape {
            'a' => decoded.push('\u{0007}'),
            'b' => decoded.push('\u{0008}'),
            'f' => decoded.push('\u{000C}'),
            'n' => decoded.push('\n'),
            'r' => decoded.push('\r'),
            't' => decoded.push('\t'),
            'v' => decoded.push('\u{000B}'),
            'u' => {
                let mut value: u32 = 0;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|ch| ch.to_digit(16))
                        .ok_or(StringDecodeError::IllegalUnicodeEscape)?;
                    value = value * 16 + digit;
                }
                let ch = char::from_u32(value)
                    .ok_or(StringDecodeError::InvalidCodePoint { value })?;
                decoded.push(ch);
            }
            other => decoded.push(other),
        }
    }
    Ok(decoded)
}

/// Classifies a number literal as an integer or a float.
///
/// Literals that fit an `i64` become [`NumberLiteral::Int`]; everything
/// else (fractions, exponents, and integers beyond the `i64` range) falls
/// back to [`NumberLiteral::Float`]. Values with no finite `f64`
/// representation fail with [`NumberDecodeError::Overflow`] instead of
/// saturating to an infinity; a classified float is always finite. This
/// also rejects `f64`'s textual `inf`/`NaN` forms, which are not number
/// literals.
pub fn classify_number(raw: &str) -> Result<NumberLiteral, NumberDecodeError> {
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(NumberLiteral::Int(value));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(NumberLiteral::Float(value)),
        Ok(_) => Err(NumberDecodeError::Overflow {
            literal: raw.to_string(),
        }),
        Err(_) => Err(NumberDecodeError::Malformed {
            literal: raw.to_string(),
        }),
    }
}
