//! The leaf dispatcher and the pluggable number policy (spec.md §4.3, §6).

use crate::{
    cursor::Cursor,
    error::{JsonError, LexicalError},
    scalar::{number, string},
    slice::StrSlice,
};

/// A scalar JSON value, parameterized over how numbers are represented.
///
/// The built-in policy ([`DefaultNumbers`]) fills `N` with
/// [`number::NumberValue`] (an `Integer`/`Double` split). spec.md §3
/// describes a "second mode" that replaces that split with a single
/// unparsed numeric slice — that is [`RawNumbers`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'b, N> {
    /// The literal `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number, shaped by the active [`NumberPolicy`].
    Number(N),
    /// A decoded string, aliasing the source buffer.
    Str(StrSlice<'b>),
}

/// The number-reading extension point spec.md §4.3 calls "a first-class
/// extension point" and §6 calls `read_other`.
///
/// Implementations decide how the leaf dispatcher represents a JSON number;
/// the default, [`DefaultNumbers`], matches spec.md §4.1's mid-level
/// `read_number`.
pub trait NumberPolicy<'b> {
    /// The representation a number is read into.
    type Number;

    /// Reads a number at the cursor, which is positioned at its first byte
    /// (`-` or a digit).
    fn read(cursor: &mut Cursor<'b>) -> Result<Self::Number, JsonError>;
}

/// The built-in number policy: parses into [`number::NumberValue`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNumbers;

impl<'b> NumberPolicy<'b> for DefaultNumbers {
    type Number = number::NumberValue;

    fn read(cursor: &mut Cursor<'b>) -> Result<Self::Number, JsonError> {
        number::read_number(cursor)
    }
}

/// A number policy that leaves the numeric text unparsed, as a
/// [`StrSlice`] into the source buffer — spec.md §3's "numeric
/// representation (slice into the source, unparsed)".
///
/// Still validates the number's grammar (sign, digits, optional fraction
/// and exponent) so the cursor ends up in the right place; it just doesn't
/// compute a value from the digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawNumbers;

impl<'b> NumberPolicy<'b> for RawNumbers {
    type Number = StrSlice<'b>;

    fn read(cursor: &mut Cursor<'b>) -> Result<Self::Number, JsonError> {
        let start = cursor.pos();
        // Delegate to the canonical reader purely for validation and
        // cursor advancement; the parsed value itself is discarded.
        number::read_number(cursor)?;
        let len = cursor.pos() - start;
        Ok(cursor.slice(start, len))
    }
}

/// Reads the scalar at the cursor and classifies it, per spec.md §4.3:
/// `"` selects the string reader, `n`/`t`/`f` attempt the `null`/boolean
/// literals, and anything else is handed to `P`'s number policy.
pub fn dispatch_leaf<'b, P: NumberPolicy<'b>>(
    cursor: &mut Cursor<'b>,
) -> Result<Leaf<'b, P::Number>, JsonError> {
    match cursor.peek() {
        b'"' => string::read_string(cursor).map(Leaf::Str),
        b'n' => {
            if number::read_null(cursor) {
                Ok(Leaf::Null)
            } else {
                Err(LexicalError::UnexpectedByte.into())
            }
        }
        b't' | b'f' => number::read_bool(cursor)
            .map(Leaf::Bool)
            .ok_or(JsonError::Lexical(LexicalError::UnexpectedByte)),
        _ => P::read(cursor).map(Leaf::Number),
    }
}
