//! `stockroom-index` — the per-category sorted item index.
//!
//! This crate contains the item model, the in-place heap sort, and the
//! binary-searched ordered sequence that every category node owns. Pure data
//! structures: no IO, no logging, no tree knowledge.

pub mod heap;
pub mod item;
pub mod sorted;

pub use heap::heap_sort;
pub use item::{compare_by_key, Item, ItemPayload};
pub use sorted::SortedItemIndex;
