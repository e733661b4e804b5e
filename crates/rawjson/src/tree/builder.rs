//! The tree builder (spec.md §4.6): an [`EventSink`] that accumulates events
//! into [`Value`]s instead of materialising them itself.
//!
//! spec.md describes the source's builder as owning a stack of "elements",
//! each an in-progress array or object buffer plus a pointer to the parent
//! slot it will be written into once closed. There are no pointers here —
//! [`Frame`] holds the `Vec` directly, and closing a composite just builds
//! the finished [`Value`] and delivers it to whatever is on top of the stack
//! next, which is the same shape of algorithm with ownership instead of
//! raw pointers doing the bookkeeping (spec.md §9's reinterpretation note).

use alloc::vec::Vec;

use crate::{
    cursor::Cursor,
    error::{JsonError, StructuralError},
    event::EventSink,
    leaf::{DefaultNumbers, Leaf, NumberPolicy},
    parser,
    slice::StrSlice,
    tree::value::Value,
};

enum Frame<'b, N> {
    Array(Vec<Value<'b, N>>),
    Object {
        entries: Vec<(StrSlice<'b>, Value<'b, N>)>,
        pending_key: Option<StrSlice<'b>>,
    },
}

/// Accumulates parser events into a [`Value`] tree.
///
/// Per spec.md §4.6, an "initial sentinel element holds the destination
/// pointer for the root" — here that sentinel is simply the empty `stack`:
/// when it's empty, delivery targets `root` instead of a frame.
pub struct TreeBuilder<'b, P: NumberPolicy<'b> = DefaultNumbers> {
    stack: Vec<Frame<'b, P::Number>>,
    root: Option<Value<'b, P::Number>>,
}

impl<'b, P: NumberPolicy<'b>> Default for TreeBuilder<'b, P> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }
}

impl<'b, P: NumberPolicy<'b>> TreeBuilder<'b, P> {
    /// A fresh builder with nothing parsed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the built root value. `None` until a full value has closed —
    /// for a well-formed single-document parse this is always `Some` once
    /// parsing returns successfully.
    pub fn into_value(self) -> Option<Value<'b, P::Number>> {
        self.root
    }

    fn deliver(&mut self, value: Value<'b, P::Number>) {
        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Object {
                entries,
                pending_key,
            }) => {
                // Both event parsers now reject a colon-less object member
                // (`{"a"}`) before ever calling `leaf`/`begin` for its value
                // — the stackless parser tracks per-level composite kind
                // (`parser::stackless::KindStack`) specifically so this
                // branch is never reached without a key already pending.
                let key = pending_key
                    .take()
                    .expect("object_entry always precedes the value it keys");
                entries.push((key, value));
            }
        }
    }
}

impl<'b, P: NumberPolicy<'b>> EventSink<'b> for TreeBuilder<'b, P> {
    type Numbers = P;

    fn leaf(&mut self, leaf: Leaf<'b, P::Number>) {
        let value = match leaf {
            Leaf::Null => Value::Null,
            Leaf::Bool(b) => Value::Bool(b),
            Leaf::Number(n) => Value::Number(n),
            Leaf::Str(s) => Value::Str(s),
        };
        self.deliver(value);
    }

    fn begin(&mut self, in_array: bool) {
        self.stack.push(if in_array {
            Frame::Array(Vec::new())
        } else {
            Frame::Object {
                entries: Vec::new(),
                pending_key: None,
            }
        });
    }

    fn array_entry(&mut self) {
        // The array frame's `Vec::push` on the matching `leaf`/`begin`/`end`
        // delivery is the entirety of "ensure one free slot" here — `Vec`
        // already doubles its own capacity on growth.
    }

    fn object_entry(&mut self, key: StrSlice<'b>) {
        if let Some(Frame::Object { pending_key, .. }) = self.stack.last_mut() {
            *pending_key = Some(key);
        }
    }

    fn end(&mut self, _in_array: bool) {
        let frame = self
            .stack
            .pop()
            .expect("end without a matching begin is rejected by the event parser first");
        let value = match frame {
            Frame::Array(items) => Value::Array(items),
            Frame::Object { entries, .. } => Value::Object(entries),
        };
        self.deliver(value);
    }
}

/// Parses `cursor` into a [`Value`] tree using the default number policy and
/// the stackless event parser — spec.md §6's `parse(cursor) -> tree?`.
///
/// The stackless parser is used here specifically because spec.md §8
/// requires the tree builder to accept documents nested far deeper than any
/// reasonable call stack allows.
pub fn parse<'b>(cursor: &mut Cursor<'b>) -> Result<Value<'b, <DefaultNumbers as NumberPolicy<'b>>::Number>, JsonError> {
    parse_with_policy::<DefaultNumbers>(cursor)
}

/// Parses `cursor` into a [`Value`] tree using a caller-chosen number policy
/// — spec.md §6's `parse_with_policies(cursor, read_other, store_leaf) ->
/// tree?`. The policy type plays the role both `read_other` and `store_leaf`
/// play in the source: it both reads the number and determines the shape
/// `Value::Number` takes.
pub fn parse_with_policy<'b, P: NumberPolicy<'b>>(
    cursor: &mut Cursor<'b>,
) -> Result<Value<'b, P::Number>, JsonError> {
    let mut builder = TreeBuilder::<P>::new();
    parser::stackless::parse(cursor, &mut builder)?;
    Ok(builder
        .into_value()
        .expect("a successful parse always delivers exactly one root value"))
}

/// Like [`parse`], but additionally rejects non-whitespace bytes left over
/// after the single root value — spec.md §7's "trailing garbage" case.
/// [`parse`] itself stops as soon as the root value's last byte is consumed
/// (spec.md §3's "cursor points just past that value's last byte"), which is
/// the right surface for a caller that means to go on reading; this is the
/// whole-document surface for a caller that doesn't.
pub fn parse_document<'b>(
    cursor: &mut Cursor<'b>,
) -> Result<Value<'b, <DefaultNumbers as NumberPolicy<'b>>::Number>, JsonError> {
    parse_document_with_policy::<DefaultNumbers>(cursor)
}

/// [`parse_document`] with a caller-chosen number policy, mirroring
/// [`parse_with_policy`].
pub fn parse_document_with_policy<'b, P: NumberPolicy<'b>>(
    cursor: &mut Cursor<'b>,
) -> Result<Value<'b, P::Number>, JsonError> {
    let value = parse_with_policy::<P>(cursor)?;
    cursor.skip_whitespace();
    if cursor.peek() != 0 {
        return Err(StructuralError::TrailingData.into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::scalar::number::NumberValue;

    macro_rules! buf_cursor {
        ($name:ident, $src:expr) => {
            let mut $name = $src.as_bytes().to_vec();
            $name.push(0);
            let mut $name = Cursor::new(&mut $name).unwrap();
        };
    }

    #[test]
    fn builds_tree_for_null() {
        buf_cursor!(cursor, "null");
        assert_eq!(parse(&mut cursor).unwrap(), Value::Null);
    }

    #[test]
    fn builds_tree_for_nested_object_and_array() {
        buf_cursor!(cursor, r#"{"a":[1,-2,3]}"#);
        let tree = parse(&mut cursor).unwrap();
        let Value::Object(entries) = &tree else {
            panic!("expected object");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.as_str(), "a");
        assert_eq!(
            entries[0].1,
            Value::Array(vec![
                Value::Number(NumberValue::Integer(1)),
                Value::Number(NumberValue::Integer(-2)),
                Value::Number(NumberValue::Integer(3)),
            ])
        );
    }

    #[test]
    fn builds_tree_for_empty_array() {
        buf_cursor!(cursor, "[]");
        assert_eq!(parse(&mut cursor).unwrap(), Value::Array(Vec::new()));
    }

    #[test]
    fn preserves_duplicate_object_keys() {
        buf_cursor!(cursor, r#"{"x":1,"x":2}"#);
        let tree = parse(&mut cursor).unwrap();
        let Value::Object(entries) = &tree else {
            panic!("expected object");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.as_str(), "x");
        assert_eq!(entries[1].0.as_str(), "x");
        assert_eq!(tree.get("x"), Some(&Value::Number(NumberValue::Integer(1))));
    }

    #[test]
    fn parse_document_rejects_trailing_data() {
        buf_cursor!(cursor, "1 2");
        assert_eq!(
            parse_document(&mut cursor),
            Err(JsonError::Structural(StructuralError::TrailingData))
        );
    }

    #[test]
    fn parse_document_accepts_trailing_whitespace() {
        buf_cursor!(cursor, "1 \n\t");
        assert_eq!(parse_document(&mut cursor).unwrap(), Value::Number(NumberValue::Integer(1)));
    }

    #[test]
    fn raw_numbers_policy_leaves_digits_unparsed() {
        use crate::leaf::RawNumbers;

        buf_cursor!(cursor, "[1, 2.5, -3e1]");
        let tree = parse_with_policy::<RawNumbers>(&mut cursor).unwrap();
        let Value::Array(items) = tree else {
            panic!("expected array");
        };
        let texts: Vec<&str> = items
            .into_iter()
            .map(|v| match v {
                Value::Number(slice) => slice.as_str(),
                _ => panic!("expected number"),
            })
            .collect();
        assert_eq!(texts, ["1", "2.5", "-3e1"]);
    }
}
