//! The two event-parser variants (spec.md §4.4, §4.5).
//!
//! Both expose the same `parse<S: EventSink>(cursor, sink) -> Result<(),
//! JsonError>` signature and, for any accepted input, emit the identical
//! event sequence; [`recursive`] is the straightforward one, [`stackless`]
//! trades call-stack depth for a constant amount of auxiliary state.

pub mod recursive;
pub mod stackless;
