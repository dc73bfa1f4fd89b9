//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Every variant is a deterministic, recoverable condition reported to the
/// caller. Nothing here is fatal to the process, and no operation that returns
/// an error leaves partial mutation behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A category name or path could not be resolved in the tree.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// An item key was absent from the target index.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// An insert or bulk load carried a key that is already present.
    #[error("duplicate item key: {0}")]
    DuplicateKey(String),

    /// A sibling category with the same (case-folded) name already exists.
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// A value failed validation (e.g. empty key, empty path).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound(name.into())
    }

    pub fn item_not_found(key: impl Into<String>) -> Self {
        Self::ItemNotFound(key.into())
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }

    pub fn duplicate_category(name: impl Into<String>) -> Self {
        Self::DuplicateCategory(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            CatalogError::category_not_found("Hand Tools").to_string(),
            "category not found: Hand Tools"
        );
        assert_eq!(
            CatalogError::duplicate_key("hammer").to_string(),
            "duplicate item key: hammer"
        );
    }
}
