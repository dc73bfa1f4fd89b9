//! `stockroom-core` — catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the strongly-typed, case-folded names used to identify
//! items and categories.

pub mod error;
pub mod name;

pub use error::{CatalogError, CatalogResult};
pub use name::{CategoryName, ItemKey};
