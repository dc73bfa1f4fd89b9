//! `stockroom-catalog` — the category hierarchy.
//!
//! Category nodes form a finite, acyclic tree, guaranteed structurally by
//! single ownership: each node owns its children outright, so no sharing and
//! no cycles are expressible. All traversal is iterative (explicit stack or
//! queue); nothing in this crate recurses, so tree depth is never bounded by
//! the call stack.

pub mod node;
pub mod tree;

pub use node::CategoryNode;
pub use tree::{CategoryTree, SubtreeItems, Walk};
