//! The built value tree (spec.md §3).

use alloc::vec::Vec;

use crate::{scalar::number::NumberValue, slice::StrSlice};

/// A materialised JSON value, parameterized over its numeric representation
/// the way [`crate::leaf::Leaf`] is — `N` defaults to
/// [`NumberValue`] (the built-in split), matching
/// [`crate::leaf::DefaultNumbers`].
///
/// Arrays and objects own their children (spec.md §3's "array.data and
/// object.data are heap allocations exclusively owned by that node");
/// object entries are kept in insertion order with no deduplication —
/// spec.md §9 leaves duplicate-key semantics to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'b, N = NumberValue> {
    /// The literal `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number, shaped by whichever [`crate::leaf::NumberPolicy`] built this
    /// tree.
    Number(N),
    /// A decoded string, aliasing the source buffer.
    Str(StrSlice<'b>),
    /// An array, in source order.
    Array(Vec<Value<'b, N>>),
    /// An object, in source order, keys not deduplicated.
    Object(Vec<(StrSlice<'b>, Value<'b, N>)>),
}

impl<'b, N> Value<'b, N> {
    /// Looks up the value of the first entry matching `key`, if this is an
    /// object (spec.md §8 scenario 6: duplicate keys both survive, so this
    /// returns only the first).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value<'b, N>> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(k, _)| k.as_str() == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// The elements of this value if it is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value<'b, N>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries of this value if it is an object, including duplicates.
    #[must_use]
    pub fn as_object(&self) -> Option<&[(StrSlice<'b>, Value<'b, N>)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }
}
