//! Static product catalog
//!
//! The catalog is an immutable ordered sequence of products, loaded once
//! at startup and read-only for the lifetime of the session. Validation
//! happens at load time so downstream code never has to re-check it.

use crate::models::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel category that matches every product
pub const ALL_CATEGORIES: &str = "All";

/// Catalog load error
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id
    #[error("duplicate product id: {0}")]
    DuplicateId(i64),

    /// A product carries a negative price
    #[error("negative price for product {id}: {price_cents}")]
    NegativePrice { id: i64, price_cents: i64 },

    /// Malformed catalog JSON
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable ordered product catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// Ids must be unique and prices non-negative.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price_cents < 0 {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price_cents: product.price_cents,
                });
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog from JSON (an array of products)
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The built-in Vailure collection
    pub fn builtin() -> Self {
        let products = vec![
            Product::new(
                1,
                "Crackle Denim Jacket",
                18000,
                "https://picsum.photos/seed/crackle-denim-jacket/800/800?grayscale",
                "Jackets",
            ),
            Product::new(
                2,
                "Embroidered Vailure Cap",
                4500,
                "https://picsum.photos/seed/vailure-cap-embroidery/800/800?grayscale",
                "Accessories",
            ),
            Product::new(
                3,
                "Minimalist Tote Bag",
                9000,
                "https://picsum.photos/seed/minimalist-black-tote/800/800?grayscale",
                "Bags",
            ),
            Product::new(
                4,
                "Crackle Leather Boots",
                22000,
                "https://picsum.photos/seed/crackle-leather-boots/800/800?grayscale",
                "Footwear",
            ),
            Product::new(
                5,
                "Crackle Slate Bag",
                9000,
                "https://picsum.photos/seed/crackle-slate-bag/800/800?grayscale",
                "Bags",
            ),
            Product::new(
                6,
                "Street Utility Tote",
                9000,
                "https://picsum.photos/seed/street-utility-tote/800/800?grayscale",
                "Bags",
            ),
        ];
        Self::new(products).expect("builtin catalog is valid")
    }

    /// Look up a product by id
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Category filter options: the "All" sentinel followed by each
    /// distinct category in first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(4).unwrap().name, "Crackle Leather Boots");
        assert_eq!(catalog.get(4).unwrap().price_cents, 22000);
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn categories_keep_first_occurrence_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec!["All", "Jackets", "Accessories", "Bags", "Footwear"]
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let products = vec![
            Product::new(1, "A", 100, "img", "Bags"),
            Product::new(1, "B", 200, "img", "Bags"),
        ];
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn negative_price_rejected() {
        let products = vec![Product::new(1, "A", -1, "img", "Bags")];
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::NegativePrice { id: 1, .. })
        ));
    }

    #[test]
    fn from_json_round_trips() {
        let json = r#"[
            {"id": 10, "name": "Test Scarf", "price_cents": 3500,
             "image_url": "https://example.com/scarf.jpg", "category": "Accessories"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.get(10).unwrap().name, "Test Scarf");
    }
}
