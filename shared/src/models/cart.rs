//! Cart line model

use super::Product;
use serde::{Deserialize, Serialize};

/// One ledger line: a product identity snapshot plus a quantity.
///
/// The ledger holds at most one line per product id. Quantity is >= 1
/// for as long as the line exists; a line whose quantity would drop to
/// zero is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: i64,
    /// Product name snapshot (catalog is immutable, kept for display)
    pub name: String,
    /// Unit price in cents
    pub unit_price_cents: i64,
    pub quantity: i64,
}

impl CartLine {
    /// Create a fresh line for a product with quantity 1
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
        }
    }

    /// Line total in cents
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}
