//! The tree builder, printer, and finaliser (spec.md §4.6, §4.7).

pub mod builder;
pub mod printer;
pub mod value;

pub use builder::{parse, parse_document, parse_document_with_policy, parse_with_policy, TreeBuilder};
pub use printer::print;
pub use value::Value;

/// Releases a built tree's heap allocations — spec.md §4.7's finaliser.
///
/// Every [`Value`] here already owns its children through ordinary `Vec`
/// ownership, so `Drop` releases the whole tree on its own; this function
/// exists to keep spec.md §6's four-operation surface
/// (`parse`/`parse_with_policies`/`print`/`finalise`) intact as an explicit
/// call site, e.g. for callers that want to free a tree before its binding
/// would otherwise go out of scope.
pub fn finalise<N>(value: Value<'_, N>) {
    drop(value);
}
