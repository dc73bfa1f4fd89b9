//! Strongly-typed, case-folded names used across the catalog.
//!
//! Item keys and category names match **case-insensitively**: equality,
//! ordering, and hashing are all defined over the case-folded spelling, while
//! the originally entered spelling is preserved for display. Defining all
//! three on the same folded form keeps `Eq`, `Ord`, and `Hash` mutually
//! consistent, which binary search and heap sort both rely on.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// Ordering key of an item within its owning category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ItemKey {
    raw: String,
    folded: String,
}

/// Name of a category node, unique among its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CategoryName {
    raw: String,
    folded: String,
}

macro_rules! impl_folded_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(raw: impl Into<String>) -> Self {
                let raw = raw.into();
                let folded = raw.to_lowercase();
                Self { raw, folded }
            }

            /// The spelling as originally entered, for display.
            pub fn as_str(&self) -> &str {
                &self.raw
            }

            /// The case-folded spelling that equality and ordering use.
            pub fn folded(&self) -> &str {
                &self.folded
            }

            pub fn is_blank(&self) -> bool {
                self.raw.trim().is_empty()
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.folded == other.folded
            }
        }

        impl Eq for $t {}

        impl PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $t {
            fn cmp(&self, other: &Self) -> Ordering {
                self.folded.cmp(&other.folded)
            }
        }

        impl Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.folded.hash(state);
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.raw, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.raw
            }
        }
    };
}

impl_folded_newtype!(ItemKey);
impl_folded_newtype!(CategoryName);
