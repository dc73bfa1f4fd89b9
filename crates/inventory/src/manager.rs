//! Use-case composition over the category tree.

use serde::{Deserialize, Serialize};
use stockroom_catalog::{CategoryNode, CategoryTree, SubtreeItems, Walk};
use stockroom_core::{CatalogError, CatalogResult, CategoryName, ItemKey};
use stockroom_index::{Item, ItemPayload, SortedItemIndex};

/// The inventory catalog facade.
///
/// Explicitly constructed and explicitly owned; there is no ambient instance.
/// Single-threaded by construction: plain `&self`/`&mut self` methods with no
/// interior mutability, so the borrow checker enforces the one-writer
/// discipline a wrapping service layer would otherwise need a lock for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryManager {
    tree: CategoryTree,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// Add an item to the named category. O(m) resolution + O(log n) search
    /// + O(n) shift.
    pub fn add_item(&mut self, category: &str, item: Item) -> CatalogResult<()> {
        let node = self.resolve_mut(category)?;
        node.items_mut().insert(item)?;
        tracing::debug!(category, "item added");
        Ok(())
    }

    /// Delete an item by key, returning it. The absence path costs only the
    /// binary search.
    pub fn delete_item(&mut self, category: &str, key: &str) -> CatalogResult<Item> {
        let node = self.resolve_mut(category)?;
        let item = node.items_mut().remove(&ItemKey::new(key))?;
        tracing::debug!(category, key, "item deleted");
        Ok(item)
    }

    /// Replace an item's payload in place, returning the previous payload.
    /// O(m + log n); the key never moves, so the index never shifts.
    pub fn edit_item(
        &mut self,
        category: &str,
        key: &str,
        payload: ItemPayload,
    ) -> CatalogResult<ItemPayload> {
        let node = self.resolve_mut(category)?;
        let previous = node.items_mut().edit(&ItemKey::new(key), payload)?;
        tracing::debug!(category, key, "item edited");
        Ok(previous)
    }

    /// Move an item between categories: remove from `from`, insert into `to`.
    ///
    /// The target is checked for existence and key collision before the
    /// source is touched, so a failed move leaves both categories unchanged.
    /// Moving within the same category is a no-op (the item must still
    /// exist).
    pub fn move_item(&mut self, from: &str, key: &str, to: &str) -> CatalogResult<()> {
        let key = ItemKey::new(key);

        let source = self
            .tree
            .resolve(from)
            .ok_or_else(|| CatalogError::category_not_found(from))?;
        let item = source
            .items()
            .get(&key)
            .ok_or_else(|| CatalogError::item_not_found(key.as_str()))?
            .clone();

        if *source.name() == CategoryName::new(to) {
            return Ok(());
        }

        let target = self
            .tree
            .resolve(to)
            .ok_or_else(|| CatalogError::category_not_found(to))?;
        if target.items().contains(&key) {
            return Err(CatalogError::duplicate_key(key.as_str()));
        }

        // Both sides verified above; neither step below can fail.
        self.resolve_mut(to)?.items_mut().insert(item)?;
        self.resolve_mut(from)?.items_mut().remove(&key)?;
        tracing::info!(from, to, key = key.as_str(), "item moved");
        Ok(())
    }

    /// Bulk-load seam: heap-sort the batch, reject duplicate keys, and
    /// install the result as the category's index, replacing any previous
    /// contents. Returns the item count. Nothing is mutated on failure.
    pub fn load_items(&mut self, category: &str, items: Vec<Item>) -> CatalogResult<usize> {
        let node = self.resolve_mut(category)?;
        let index = SortedItemIndex::from_unsorted(items)?;
        let count = index.len();
        node.install_items(index);
        tracing::info!(category, count, "items loaded");
        Ok(count)
    }

    /// Every item in the named category's subtree, level order over nodes,
    /// ascending by key within each node.
    pub fn display_category(&self, category: &str) -> CatalogResult<SubtreeItems<'_>> {
        self.tree.items_under(category)
    }

    /// Whole-tree pre-order walk of `(depth, node)`, for display.
    pub fn display_all(&self) -> Walk<'_> {
        self.tree.walk()
    }

    pub fn add_category(&mut self, path: &[&str]) -> CatalogResult<()> {
        self.tree.add_category(path)?;
        tracing::debug!(path = %path.join(" > "), "category added");
        Ok(())
    }

    /// Remove a category, cascading over its subtree and items.
    pub fn remove_category(&mut self, path: &[&str]) -> CatalogResult<CategoryNode> {
        let removed = self.tree.remove_category(path)?;
        tracing::info!(path = %path.join(" > "), "category removed");
        Ok(removed)
    }

    /// Item count across the whole tree.
    pub fn total_items(&self) -> usize {
        self.tree.walk().map(|(_, node)| node.items().len()).sum()
    }

    fn resolve_mut(&mut self, category: &str) -> CatalogResult<&mut CategoryNode> {
        self.tree
            .resolve_mut(category)
            .ok_or_else(|| CatalogError::category_not_found(category))
    }
}
