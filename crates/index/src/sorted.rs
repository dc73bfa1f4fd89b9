//! The sorted item index: a dense, binary-searched sequence.
//!
//! Representation is a dense `Vec<Item>` kept ascending by key at every
//! observable point. Lookups are O(log n); insert/remove pay an O(n) shift to
//! keep the sequence dense. That trade favors read-heavy inventories, where
//! lookups and ordered iteration dominate mutations.

use serde::{Deserialize, Serialize};
use stockroom_core::{CatalogError, CatalogResult, ItemKey};

use crate::heap::heap_sort;
use crate::item::{compare_by_key, Item, ItemPayload};

/// Ordered sequence of the items directly stored at one category node.
///
/// Invariants: strictly ascending by (case-folded) key, no duplicate keys.
/// Every failing operation leaves the index exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct SortedItemIndex {
    items: Vec<Item>,
}

impl SortedItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from an unsorted batch: heap-sort in place, then reject
    /// duplicate keys (now adjacent). The bulk-load seam.
    pub fn from_unsorted(mut items: Vec<Item>) -> CatalogResult<Self> {
        heap_sort(&mut items, compare_by_key);
        for pair in items.windows(2) {
            if pair[0].key() == pair[1].key() {
                return Err(CatalogError::duplicate_key(pair[1].key().as_str()));
            }
        }
        Ok(Self { items })
    }

    /// Binary search for `key`: `Ok(position)` on a hit, `Err(insertion
    /// point)` on a miss so callers can insert without re-searching.
    /// O(log n) comparisons.
    pub fn locate(&self, key: &ItemKey) -> Result<usize, usize> {
        let mut lo = 0;
        let mut hi = self.items.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.items[mid].key().cmp(key) {
                core::cmp::Ordering::Less => lo = mid + 1,
                core::cmp::Ordering::Greater => hi = mid,
                core::cmp::Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.locate(key).ok().map(|pos| &self.items[pos])
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.locate(key).is_ok()
    }

    /// Insert in order: O(log n) search plus an O(n) shift to open the slot.
    pub fn insert(&mut self, item: Item) -> CatalogResult<()> {
        match self.locate(item.key()) {
            Ok(_) => Err(CatalogError::duplicate_key(item.key().as_str())),
            Err(pos) => {
                self.items.insert(pos, item);
                Ok(())
            }
        }
    }

    /// Remove by key, returning the item. The absence path is O(log n) only,
    /// deliberately cheaper than the O(n) shift the success path pays.
    pub fn remove(&mut self, key: &ItemKey) -> CatalogResult<Item> {
        match self.locate(key) {
            Ok(pos) => Ok(self.items.remove(pos)),
            Err(_) => Err(CatalogError::item_not_found(key.as_str())),
        }
    }

    /// Replace the payload of the item at `key` in place, returning the
    /// previous payload. O(log n): the key does not move, so nothing shifts.
    pub fn edit(&mut self, key: &ItemKey, payload: ItemPayload) -> CatalogResult<ItemPayload> {
        match self.locate(key) {
            Ok(pos) => Ok(self.items[pos].replace_payload(payload)),
            Err(_) => Err(CatalogError::item_not_found(key.as_str())),
        }
    }

    /// Ascending iteration, lazy and restartable.
    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a SortedItemIndex {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Deserialization re-establishes the sort invariant instead of trusting the
/// wire order, routing through the same bulk-load path as `from_unsorted`.
impl TryFrom<Vec<Item>> for SortedItemIndex {
    type Error = CatalogError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::from_unsorted(items)
    }
}

impl From<SortedItemIndex> for Vec<Item> {
    fn from(index: SortedItemIndex) -> Self {
        index.items
    }
}
