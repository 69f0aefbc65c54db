//! Filter Engine
//!
//! Pure derivation of the visible product subset from the catalog and the
//! active filter inputs. Recomputed on every input change; preserves
//! catalog order.

use serde::{Deserialize, Serialize};
use shared::{ALL_CATEGORIES, Product};
use tracing::debug;

/// Derive the visible subset of `catalog`.
///
/// The category predicate is an exact match unless `active_category` is the
/// `"All"` sentinel. The text predicate is a case-insensitive substring
/// match against name or category; search text is trimmed first and imposes
/// no filter when empty. Both predicates are ANDed.
pub fn visible<'a>(
    catalog: &'a [Product],
    active_category: &str,
    search_text: &str,
) -> Vec<&'a Product> {
    let needle = search_text.trim().to_lowercase();

    catalog
        .iter()
        .filter(|p| active_category == ALL_CATEGORIES || p.category == active_category)
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Filter inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    active_category: String,
    search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_text: String::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
        debug!(category = %self.active_category, "filter category changed");
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Reset the query (closing the search bar discards it)
    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Apply both predicates to `catalog`
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        visible(catalog, &self.active_category, &self.search_text)
    }
}
