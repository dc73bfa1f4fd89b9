//! The category tree: resolution and traversal.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use stockroom_core::{CatalogError, CatalogResult, CategoryName};

use crate::node::CategoryNode;

/// Owns the root category nodes of one catalog.
///
/// Single ownership of every node keeps the tree finite and acyclic by
/// construction. All traversal here is iterative; depth is bounded only by
/// memory, never by the call stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTree {
    roots: Vec<CategoryNode>,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    /// Attach a prebuilt node as a new root. Fails on a (case-insensitive)
    /// root name collision.
    pub fn add_root(&mut self, node: CategoryNode) -> CatalogResult<()> {
        if self.roots.iter().any(|r| r.name() == node.name()) {
            return Err(CatalogError::duplicate_category(node.name().as_str()));
        }
        self.roots.push(node);
        Ok(())
    }

    /// Resolve a category by name alone: iterative pre-order over the whole
    /// tree, children in stored order, **first match wins**.
    ///
    /// Name-only resolution is ambiguous when branches share a name; the
    /// first-match rule makes the ambiguity deterministic rather than
    /// resolving it. `resolve_path` is the unambiguous alternative. Cost is
    /// O(m) in nodes visited, worst case the whole tree.
    pub fn resolve(&self, name: &str) -> Option<&CategoryNode> {
        let want = CategoryName::new(name);
        let mut stack: Vec<&CategoryNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if *node.name() == want {
                return Some(node);
            }
            stack.extend(node.children().iter().rev());
        }
        None
    }

    /// Mutable counterpart of [`resolve`](Self::resolve); same order, same
    /// first-match rule.
    pub fn resolve_mut(&mut self, name: &str) -> Option<&mut CategoryNode> {
        let want = CategoryName::new(name);
        let mut stack: Vec<&mut CategoryNode> = self.roots.iter_mut().rev().collect();
        while let Some(node) = stack.pop() {
            if *node.name() == want {
                return Some(node);
            }
            stack.extend(node.children_mut().iter_mut().rev());
        }
        None
    }

    /// Resolve a full path from the roots, each segment matching a child of
    /// the previous node case-insensitively. An empty path resolves to
    /// nothing.
    pub fn resolve_path(&self, path: &[&str]) -> Option<&CategoryNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root(&CategoryName::new(*first))?;
        for segment in rest {
            node = node.child(&CategoryName::new(*segment))?;
        }
        Some(node)
    }

    pub fn resolve_path_mut(&mut self, path: &[&str]) -> Option<&mut CategoryNode> {
        let (first, rest) = path.split_first()?;
        let first = CategoryName::new(*first);
        let mut node = self.roots.iter_mut().find(|r| *r.name() == first)?;
        for segment in rest {
            node = node.child_mut(&CategoryName::new(*segment))?;
        }
        Some(node)
    }

    /// Add a category at `path`: the last segment is the new category, the
    /// prefix is the parent path. Parents are not auto-created.
    pub fn add_category(&mut self, path: &[&str]) -> CatalogResult<()> {
        let (last, prefix) = path
            .split_last()
            .ok_or_else(|| CatalogError::validation("category path cannot be empty"))?;
        let name = CategoryName::new(*last);
        if name.is_blank() {
            return Err(CatalogError::validation("category name cannot be empty"));
        }

        if prefix.is_empty() {
            self.add_root(CategoryNode::new(name))
        } else {
            let parent = self
                .resolve_path_mut(prefix)
                .ok_or_else(|| CatalogError::category_not_found(prefix.join(" > ")))?;
            parent.add_child(CategoryNode::new(name))
        }
    }

    /// Detach and return the category at `path`. Its subtree and items
    /// cascade with it.
    pub fn remove_category(&mut self, path: &[&str]) -> CatalogResult<CategoryNode> {
        let (last, prefix) = path
            .split_last()
            .ok_or_else(|| CatalogError::validation("category path cannot be empty"))?;
        let name = CategoryName::new(*last);

        if prefix.is_empty() {
            match self.roots.iter().position(|r| *r.name() == name) {
                Some(pos) => Ok(self.roots.remove(pos)),
                None => Err(CatalogError::category_not_found(*last)),
            }
        } else {
            let parent = self
                .resolve_path_mut(prefix)
                .ok_or_else(|| CatalogError::category_not_found(prefix.join(" > ")))?;
            parent.remove_child(&name)
        }
    }

    /// Whole-tree traversal: lazy pre-order yielding `(depth, node)`, driven
    /// by an explicit stack rather than recursion.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().map(|r| (0, r)).collect(),
        }
    }

    /// Every item stored at `name`'s node or any descendant, lazily.
    ///
    /// Order, held invariant: level-order over the subtree's nodes, ascending
    /// by key within each node. Cost is O(k) in subtree size; sibling and
    /// ancestor categories are never visited.
    pub fn items_under(&self, name: &str) -> CatalogResult<SubtreeItems<'_>> {
        let node = self
            .resolve(name)
            .ok_or_else(|| CatalogError::category_not_found(name))?;
        Ok(SubtreeItems::new(node))
    }

    fn root(&self, name: &CategoryName) -> Option<&CategoryNode> {
        self.roots.iter().find(|r| r.name() == name)
    }
}

/// Iterator behind [`CategoryTree::walk`]: deterministic pre-order with an
/// explicit stack. Children are pushed reversed so they pop in stored order.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a CategoryNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a CategoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

/// Iterator behind [`CategoryTree::items_under`]: an explicit FIFO queue of
/// nodes (level order), draining each node's index in ascending key order
/// before moving on.
#[derive(Debug)]
pub struct SubtreeItems<'a> {
    queue: VecDeque<&'a CategoryNode>,
    current: core::slice::Iter<'a, stockroom_index::Item>,
}

impl<'a> SubtreeItems<'a> {
    fn new(root: &'a CategoryNode) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(root.children());
        Self {
            queue,
            current: root.items().iter(),
        }
    }
}

impl<'a> Iterator for SubtreeItems<'a> {
    type Item = &'a stockroom_index::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(item);
            }
            let node = self.queue.pop_front()?;
            self.queue.extend(node.children());
            self.current = node.items().iter();
        }
    }
}
