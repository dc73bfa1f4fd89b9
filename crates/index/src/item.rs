//! Inventory item: a sortable key plus an opaque payload.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockroom_core::{CatalogError, CatalogResult, ItemKey};

/// The part of an item the index never inspects.
///
/// Only the key participates in ordering; everything here can change on an
/// edit without the item moving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub quantity: u32,
    /// Price in the smallest currency unit.
    pub unit_price: u64,
    pub added_at: DateTime<Utc>,
}

/// A single inventory item. Belongs to exactly one category at a time.
///
/// The key is private and has no setter: changing a key would invalidate the
/// owning index's sort order, so key changes are expressed as remove + insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    key: ItemKey,
    payload: ItemPayload,
}

impl Item {
    /// Create an item. Blank keys are rejected.
    pub fn new(key: impl Into<ItemKey>, payload: ItemPayload) -> CatalogResult<Self> {
        let key = key.into();
        if key.is_blank() {
            return Err(CatalogError::validation("item key cannot be empty"));
        }
        Ok(Self { key, payload })
    }

    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    pub fn payload(&self) -> &ItemPayload {
        &self.payload
    }

    /// Swap in a new payload, returning the previous one.
    pub(crate) fn replace_payload(&mut self, payload: ItemPayload) -> ItemPayload {
        core::mem::replace(&mut self.payload, payload)
    }
}

/// Total order over items: case-folded key comparison.
///
/// Ties occur only at (case-insensitive) key equality, which is the strict
/// total order binary search and heap sort require.
pub fn compare_by_key(a: &Item, b: &Item) -> Ordering {
    a.key.cmp(&b.key)
}
