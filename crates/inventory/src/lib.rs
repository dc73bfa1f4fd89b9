//! `stockroom-inventory` — the inventory manager facade.
//!
//! Composes the category tree and the per-category sorted indexes into the
//! add/delete/edit/move/display/bulk-load use cases. This is the crate
//! external collaborators (CLI, import layers) talk to: plain identifiers in,
//! results or typed errors out.

pub mod manager;

pub use manager::InventoryManager;
