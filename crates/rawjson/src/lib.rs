//! An in-place JSON parser: string escapes decode destructively into the
//! same mutable input buffer, so a successful parse allocates nothing
//! beyond what the tree builder needs for its own composite buffers.
//!
//! The crate is organized bottom-up, matching how a parse actually flows:
//! [`cursor`] is the mutable position every other module shares; [`scalar`]
//! reads `null`/booleans/numbers/strings at that cursor; [`leaf`]
//! classifies which scalar reader to call; [`event`] defines the sink
//! trait both event parsers in [`parser`] drive; and [`tree`] is the
//! optional heap-backed layer built on top of the event protocol.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod cursor;
pub mod error;
pub mod event;
pub mod leaf;
pub mod parser;
pub mod scalar;
pub mod slice;
pub mod tree;

pub use cursor::Cursor;
pub use error::{JsonError, LexicalError, StructuralError, SurrogateError};
pub use event::{EventSink, SinkNumber};
pub use leaf::{DefaultNumbers, Leaf, NumberPolicy, RawNumbers};
pub use scalar::number::NumberValue;
pub use slice::StrSlice;
pub use tree::Value;
