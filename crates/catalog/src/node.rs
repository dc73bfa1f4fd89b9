//! A single node in the category hierarchy.

use serde::{Deserialize, Serialize};
use stockroom_core::{CatalogError, CatalogResult, CategoryName};
use stockroom_index::SortedItemIndex;

/// A named container holding items and/or child categories.
///
/// Children keep insertion order; that order is what makes every traversal in
/// this crate deterministic. Sibling names are unique case-insensitively. A
/// node may hold both children and items at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    name: CategoryName,
    children: Vec<CategoryNode>,
    items: SortedItemIndex,
}

impl CategoryNode {
    pub fn new(name: impl Into<CategoryName>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            items: SortedItemIndex::new(),
        }
    }

    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    pub fn children(&self) -> &[CategoryNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<CategoryNode> {
        &mut self.children
    }

    pub fn items(&self) -> &SortedItemIndex {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut SortedItemIndex {
        &mut self.items
    }

    /// Replace this node's entire index, returning the previous one.
    pub fn install_items(&mut self, items: SortedItemIndex) -> SortedItemIndex {
        core::mem::replace(&mut self.items, items)
    }

    /// Direct child by (case-insensitive) name.
    pub fn child(&self, name: &CategoryName) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.name == *name)
    }

    pub fn child_mut(&mut self, name: &CategoryName) -> Option<&mut CategoryNode> {
        self.children.iter_mut().find(|c| c.name == *name)
    }

    /// Attach a child. Fails on a (case-insensitive) sibling name collision.
    pub fn add_child(&mut self, child: CategoryNode) -> CatalogResult<()> {
        if self.child(&child.name).is_some() {
            return Err(CatalogError::duplicate_category(child.name.as_str()));
        }
        self.children.push(child);
        Ok(())
    }

    /// Detach and return a direct child. The child's subtree and items go
    /// with it.
    pub fn remove_child(&mut self, name: &CategoryName) -> CatalogResult<CategoryNode> {
        match self.children.iter().position(|c| c.name == *name) {
            Some(pos) => Ok(self.children.remove(pos)),
            None => Err(CatalogError::category_not_found(name.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_lookup_is_case_insensitive() {
        let mut node = CategoryNode::new("Tools");
        node.add_child(CategoryNode::new("Hand Tools")).unwrap();

        assert!(node.child(&CategoryName::new("hand tools")).is_some());
        assert!(node.child(&CategoryName::new("Power Tools")).is_none());
    }

    #[test]
    fn sibling_collision_is_rejected_case_insensitively() {
        let mut node = CategoryNode::new("Tools");
        node.add_child(CategoryNode::new("Hand Tools")).unwrap();

        let err = node.add_child(CategoryNode::new("HAND TOOLS")).unwrap_err();
        assert_eq!(err, CatalogError::duplicate_category("HAND TOOLS"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn remove_child_detaches_the_whole_subtree() {
        let mut node = CategoryNode::new("Tools");
        let mut hand = CategoryNode::new("Hand Tools");
        hand.add_child(CategoryNode::new("Hammers")).unwrap();
        node.add_child(hand).unwrap();

        let removed = node.remove_child(&CategoryName::new("hand tools")).unwrap();
        assert_eq!(removed.children().len(), 1);
        assert!(node.children().is_empty());

        let err = node.remove_child(&CategoryName::new("hand tools")).unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(_)));
    }
}
