//! Error kinds reported by the string decoder, number readers and event
//! parsers.
//!
//! All of these are reported as a plain `Result<_, JsonError>` up to the
//! immediate caller, matching spec.md §7: the cursor is left at or near the
//! offending byte but callers do not get a structured source span back from
//! the low-level readers. [`JsonError`] groups failures into the four
//! families spec.md names rather than inventing a new taxonomy.

use thiserror::Error;

/// A parse failure, grouped into the four families spec.md §7 names.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// Unexpected byte, unterminated string, malformed escape, or an
    /// unescaped control byte inside a string.
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),

    /// Unpaired or invalid UTF-16 surrogate sequence in a `\u` escape.
    #[error("invalid surrogate pair: {0}")]
    Surrogate(#[from] SurrogateError),

    /// Integer magnitude exceeds the signed range, or an exponent exceeds
    /// what the platform can represent.
    #[error("numeric overflow")]
    NumericOverflow,

    /// Missing `:` in an object, missing `,`/`]`/`}`, trailing garbage, or a
    /// value expected where none was found.
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),
}

/// Reasons a string or scalar token failed to lex.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalError {
    /// The cursor was not positioned at a recognised scalar token.
    #[error("unexpected byte")]
    UnexpectedByte,
    /// A string's closing `"` was never found.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `\` escape was followed by a byte that is not one of the
    /// recognised escape letters.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A byte below 0x20 appeared unescaped inside a string.
    #[error("illegal control byte in string")]
    IllegalControlByte,
    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
}

/// Reasons a `\uXXXX` escape (or pair of them) failed to decode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurrogateError {
    /// A high surrogate (`0xD800..=0xDBFF`) was not followed by `\uYYYY`
    /// with a low surrogate.
    #[error("unpaired high surrogate")]
    MissingLowSurrogate,
    /// A low surrogate (`0xDC00..=0xDFFF`) appeared without a preceding
    /// high surrogate.
    #[error("unpaired low surrogate")]
    UnpairedLowSurrogate,
}

/// Grammar-shape failures above the scalar-reader layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    /// An object entry's key was not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// An array or object was not followed by `,`, `]`, or `}` as required.
    #[error("expected ',', ']' or '}}'")]
    ExpectedCommaOrClose,
    /// The document continued with non-whitespace bytes after its single
    /// root value. Returned by [`crate::tree::parse_document`] and
    /// [`crate::tree::parse_document_with_policy`]; the plain `parse`
    /// variants stop at the value's last byte and never produce this.
    #[error("trailing data after value")]
    TrailingData,
    /// A value was required but the cursor was at end of input or an
    /// unexpected byte.
    #[error("expected a value")]
    ExpectedValue,
    /// An object key was required but the cursor was not at a `"`.
    #[error("expected a string key")]
    ExpectedKey,
}
