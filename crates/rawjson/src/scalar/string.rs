//! The in-place JSON string decoder (spec.md §4.2).
//!
//! This is the hard engineering spec.md assigns to this crate: a two-phase
//! scan that, for strings with no escapes, never touches memory beyond the
//! [`super::swar`] scan itself, and for strings with escapes, rewrites the
//! decoded bytes *over* the source bytes using a trailing write cursor that
//! never runs ahead of the read cursor.

use crate::{
    cursor::Cursor,
    error::{JsonError, LexicalError, SurrogateError},
    scalar::swar,
    slice::StrSlice,
};

/// Decodes a JSON string at the cursor (which must be positioned at the
/// opening `"`), rewriting any escapes in place.
///
/// On success the cursor is left just past the closing `"`, and the
/// returned slice's bytes `[start, start+len)` are valid UTF-8 with a NUL
/// byte at `start + len` — the closing quote's byte, or the first escaped
/// byte's position, whichever the content vacated.
pub fn read_string<'b>(cursor: &mut Cursor<'b>) -> Result<StrSlice<'b>, JsonError> {
    if cursor.peek() != b'"' {
        return Err(LexicalError::UnexpectedByte.into());
    }
    cursor.advance(1);
    let start = cursor.pos();

    // Phase 1: fast scan for the first quote, backslash, or illegal control
    // byte. If none turns up before end of input, the string never closed.
    let offset = match swar::find_first_special(cursor.remaining()) {
        Some(offset) => offset,
        None => return Err(LexicalError::UnterminatedString.into()),
    };
    let hit = start + offset;
    match cursor.byte_at(hit) {
        b'"' => {
            // Phase 2 is skipped entirely: the span is already valid UTF-8
            // content (no control bytes, per the scan above) and closing
            // the string only requires stamping the NUL terminator over the
            // quote byte.
            let len = hit - start;
            // SAFETY: `hit < cursor.len()`, established by the scan above.
            unsafe { cursor.write_at(hit, 0) };
            cursor.set_pos(hit + 1);
            Ok(cursor.slice(start, len))
        }
        b'\\' => rewrite_with_escapes(cursor, start, hit),
        _ => Err(LexicalError::IllegalControlByte.into()),
    }
}

/// Phase 2: rewrites `[write_from, closing quote)` in place, processing
/// escapes, starting with the write cursor at the first escape's position.
fn rewrite_with_escapes<'b>(
    cursor: &mut Cursor<'b>,
    start: usize,
    first_escape: usize,
) -> Result<StrSlice<'b>, JsonError> {
    let mut read = first_escape;
    let mut write = first_escape;

    loop {
        if read >= cursor.len() {
            return Err(LexicalError::UnterminatedString.into());
        }
        match cursor.byte_at(read) {
            b'"' => {
                // SAFETY: `write <= read < cursor.len()`.
                unsafe { cursor.write_at(write, 0) };
                cursor.set_pos(read + 1);
                return Ok(cursor.slice(start, write - start));
            }
            control if control <= 0x1F => return Err(LexicalError::IllegalControlByte.into()),
            b'\\' => {
                read += 1;
                write += decode_escape(cursor, &mut read, write)?;
            }
            byte => {
                if write != read {
                    // SAFETY: `write < read < cursor.len()`.
                    unsafe { cursor.write_at(write, byte) };
                }
                write += 1;
                read += 1;
            }
        }
    }
}

/// Decodes one escape sequence starting at `*read` (the byte just after the
/// `\`), writing its UTF-8 expansion at `write`. Returns the number of bytes
/// written and advances `*read` past the consumed source bytes.
fn decode_escape(cursor: &mut Cursor<'_>, read: &mut usize, write: usize) -> Result<usize, JsonError> {
    if *read >= cursor.len() {
        return Err(LexicalError::UnterminatedString.into());
    }
    let simple = match cursor.byte_at(*read) {
        b'"' => Some(b'"'),
        b'\\' => Some(b'\\'),
        b'/' => Some(b'/'),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        _ => None,
    };
    if let Some(out) = simple {
        // SAFETY: `write < cursor.len()`, maintained by the caller's loop.
        unsafe { cursor.write_at(write, out) };
        *read += 1;
        return Ok(1);
    }
    if cursor.byte_at(*read) != b'u' {
        return Err(LexicalError::InvalidEscape.into());
    }
    *read += 1;
    let high = read_hex4(cursor, *read)?;
    *read += 4;

    if (0xD800..0xDC00).contains(&high) {
        if cursor.byte_at(*read) != b'\\' || cursor.byte_at(*read + 1) != b'u' {
            return Err(SurrogateError::MissingLowSurrogate.into());
        }
        let low = read_hex4(cursor, *read + 2)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(SurrogateError::MissingLowSurrogate.into());
        }
        *read += 6;
        let code_point = 0x10000 + (((high - 0xD800) as u32) << 10) + (low - 0xDC00) as u32;
        Ok(write_utf8(cursor, write, code_point))
    } else if (0xDC00..0xE000).contains(&high) {
        Err(SurrogateError::UnpairedLowSurrogate.into())
    } else {
        Ok(write_utf8(cursor, write, high as u32))
    }
}

/// Reads exactly four hex digits starting at `pos`, returning their value.
fn read_hex4(cursor: &Cursor<'_>, pos: usize) -> Result<u16, JsonError> {
    let mut value: u16 = 0;
    for i in 0..4 {
        let idx = pos + i;
        if idx >= cursor.len() {
            return Err(LexicalError::InvalidUnicodeEscape.into());
        }
        let digit = match cursor.byte_at(idx) {
            b @ b'0'..=b'9' => b - b'0',
            b @ b'a'..=b'f' => b - b'a' + 10,
            b @ b'A'..=b'F' => b - b'A' + 10,
            _ => return Err(LexicalError::InvalidUnicodeEscape.into()),
        };
        value = (value << 4) | u16::from(digit);
    }
    Ok(value)
}

/// Encodes `code_point` as UTF-8 at `write`, returning the byte count (1–4,
/// per spec.md §4.2's size table). `code_point` is always a valid scalar
/// value here: lone surrogates are rejected before this is called, and
/// surrogate pairs are combined into the `0x10000..=0x10FFFF` range first.
fn write_utf8(cursor: &mut Cursor<'_>, write: usize, code_point: u32) -> usize {
    let ch = char::from_u32(code_point).expect("surrogate handling guarantees a scalar value");
    let mut buf = [0u8; 4];
    let encoded = ch.encode_utf8(&mut buf);
    for (i, &b) in encoded.as_bytes().iter().enumerate() {
        // SAFETY: caller maintains `write + encoded.len() <= cursor.len()`.
        unsafe { cursor.write_at(write + i, b) };
    }
    encoded.len()
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn decode(src: &str) -> Result<String, JsonError> {
        let mut buf = src.as_bytes().to_vec();
        buf.push(0);
        let mut cursor = Cursor::new(&mut buf).unwrap();
        read_string(&mut cursor).map(|s| s.as_str().into())
    }

    #[test]
    fn decodes_empty_string() {
        assert_eq!(decode(r#""""#).unwrap(), "");
    }

    #[test]
    fn decodes_plain_string_with_no_escapes() {
        assert_eq!(decode(r#""hello""#).unwrap(), "hello");
    }

    #[test]
    fn decodes_simple_escapes() {
        assert_eq!(decode(r#""he\"llo\n""#).unwrap(), "he\"llo\n");
    }

    #[test]
    fn decodes_all_simple_escape_letters() {
        assert_eq!(
            decode(r#""\"\\\/\b\f\n\r\t""#).unwrap(),
            "\"\\/\u{8}\u{c}\n\r\t"
        );
    }

    #[test]
    fn decodes_bmp_unicode_escape() {
        assert_eq!(decode(r#""é""#).unwrap(), "\u{e9}");
    }

    #[test]
    fn decodes_surrogate_pair() {
        let s = decode(r#""𝄞""#).unwrap();
        assert_eq!(s.as_bytes(), [0xF0, 0x9D, 0x84, 0x9E]);
        let s = decode(r#""😀""#).unwrap();
        assert_eq!(s.as_bytes(), [0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn rejects_lone_high_surrogate() {
        assert!(matches!(
            decode(r#""\uD834""#),
            Err(JsonError::Surrogate(SurrogateError::MissingLowSurrogate))
        ));
    }

    #[test]
    fn rejects_lone_low_surrogate() {
        assert!(matches!(
            decode(r#""\uDD1E""#),
            Err(JsonError::Surrogate(SurrogateError::UnpairedLowSurrogate))
        ));
    }

    #[test]
    fn rejects_unescaped_control_bytes_but_allows_del() {
        let mut buf = b"\"a\x1fb\"\0".to_vec();
        let mut cursor = Cursor::new(&mut buf).unwrap();
        assert!(matches!(
            read_string(&mut cursor),
            Err(JsonError::Lexical(LexicalError::IllegalControlByte))
        ));

        let mut buf = b"\"a\x7fb\"\0".to_vec();
        let mut cursor = Cursor::new(&mut buf).unwrap();
        assert_eq!(read_string(&mut cursor).unwrap().as_str(), "a\x7fb");
    }

    #[test]
    fn rejects_unterminated_string() {
        let mut buf = b"\"abc\0".to_vec();
        let mut cursor = Cursor::new(&mut buf).unwrap();
        assert!(matches!(
            read_string(&mut cursor),
            Err(JsonError::Lexical(LexicalError::UnterminatedString))
        ));
    }

    #[test]
    fn leaves_cursor_just_past_closing_quote() {
        let mut buf = b"\"abc\"xyz\0".to_vec();
        let mut cursor = Cursor::new(&mut buf).unwrap();
        read_string(&mut cursor).unwrap();
        assert_eq!(cursor.pos(), 5);
        assert_eq!(cursor.peek(), b'x');
    }
}
