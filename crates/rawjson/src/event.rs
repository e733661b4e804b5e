//! `EventSink`: the capability set both event parsers drive (spec.md §6).
//!
//! spec.md's Design Notes call for turning the source's callback record of
//! function pointers into "a capability set (any collection of five
//! operations) that the event parsers consume polymorphically." That's this
//! trait: [`crate::parser::recursive::parse`] and
//! [`crate::parser::stackless::parse`] are both generic over `S: EventSink`
//! and call only these five methods, dispatching numbers through `S`'s
//! chosen [`NumberPolicy`].

use crate::{
    leaf::{Leaf, NumberPolicy},
    slice::StrSlice,
};

/// The five operations an event parser emits, plus the number policy.
///
/// `in_array` on [`begin`](EventSink::begin)/[`end`](EventSink::end) is
/// `true` when the composite being opened or closed is an array, `false`
/// for an object.
pub trait EventSink<'b> {
    /// The number policy this sink reads numbers with — spec.md §6's
    /// `read_other` extension point. Defaults are
    /// [`crate::leaf::DefaultNumbers`] and [`crate::leaf::RawNumbers`].
    type Numbers: NumberPolicy<'b>;

    /// Called for every scalar, including ones nested inside composites.
    fn leaf(&mut self, leaf: Leaf<'b, <Self::Numbers as NumberPolicy<'b>>::Number>);

    /// Called when `[` or `{` opens a composite.
    fn begin(&mut self, in_array: bool);

    /// Called before every array element, including the first.
    fn array_entry(&mut self);

    /// Called before every object member, including the first, supplying
    /// its decoded key.
    fn object_entry(&mut self, key: StrSlice<'b>);

    /// Called when `]` or `}` closes a composite.
    fn end(&mut self, in_array: bool);
}

/// Convenience alias for the value an `S: EventSink` reads its numbers into.
pub type SinkNumber<'b, S> = <<S as EventSink<'b>>::Numbers as NumberPolicy<'b>>::Number;
