//! The recursive event parser (spec.md §4.4).
//!
//! Uses call-stack proportional to document depth — the straightforward
//! implementation of the grammar, kept around both as the thing
//! [`super::stackless`] is tested against (spec.md §8's fuzz-equivalence
//! property) and because it is the simplest way to read this crate's event
//! protocol.

use crate::{
    cursor::Cursor,
    error::{JsonError, StructuralError},
    event::EventSink,
    leaf::dispatch_leaf,
};

/// Parses one JSON value at the cursor (skipping leading whitespace first),
/// emitting events to `sink`. Leaves the cursor just past the value.
pub fn parse<'b, S: EventSink<'b>>(cursor: &mut Cursor<'b>, sink: &mut S) -> Result<(), JsonError> {
    cursor.skip_whitespace();
    parse_value(cursor, sink)
}

fn parse_value<'b, S: EventSink<'b>>(cursor: &mut Cursor<'b>, sink: &mut S) -> Result<(), JsonError> {
    match cursor.peek() {
        b'[' => parse_array(cursor, sink),
        b'{' => parse_object(cursor, sink),
        0 => Err(StructuralError::ExpectedValue.into()),
        _ => {
            let leaf = dispatch_leaf::<S::Numbers>(cursor)?;
            sink.leaf(leaf);
            Ok(())
        }
    }
}

fn parse_array<'b, S: EventSink<'b>>(cursor: &mut Cursor<'b>, sink: &mut S) -> Result<(), JsonError> {
    cursor.advance(1); // '['
    sink.begin(true);
    cursor.skip_whitespace();
    if cursor.peek() == b']' {
        cursor.advance(1);
        sink.end(true);
        return Ok(());
    }
    loop {
        sink.array_entry();
        parse_value(cursor, sink)?;
        cursor.skip_whitespace();
        match cursor.peek() {
            b',' => {
                cursor.advance(1);
                cursor.skip_whitespace();
            }
            _ => break,
        }
    }
    cursor.expect_byte(b']', StructuralError::ExpectedCommaOrClose)?;
    sink.end(true);
    Ok(())
}

fn parse_object<'b, S: EventSink<'b>>(cursor: &mut Cursor<'b>, sink: &mut S) -> Result<(), JsonError> {
    cursor.advance(1); // '{'
    sink.begin(false);
    cursor.skip_whitespace();
    if cursor.peek() == b'}' {
        cursor.advance(1);
        sink.end(false);
        return Ok(());
    }
    loop {
        let key = crate::scalar::string::read_string(cursor)
            .map_err(|_| JsonError::Structural(StructuralError::ExpectedKey))?;
        cursor.skip_whitespace();
        cursor.expect_byte(b':', StructuralError::ExpectedColon)?;
        sink.object_entry(key);
        cursor.skip_whitespace();
        parse_value(cursor, sink)?;
        cursor.skip_whitespace();
        match cursor.peek() {
            b',' => {
                cursor.advance(1);
                cursor.skip_whitespace();
            }
            _ => break,
        }
    }
    cursor.expect_byte(b'}', StructuralError::ExpectedCommaOrClose)?;
    sink.end(false);
    Ok(())
}
