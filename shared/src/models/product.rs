//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Created once at catalog load, never mutated during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in cents
    pub price_cents: i64,
    pub image_url: String,
    /// Category name (open set, e.g. "Jackets", "Bags")
    pub category: String,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price_cents: i64,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents,
            image_url: image_url.into(),
            category: category.into(),
        }
    }
}
