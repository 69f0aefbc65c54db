//! Cart Ledger
//!
//! In-memory quantity-per-product mapping with add/update/remove
//! operations and derived totals. Holds at most one line per product id;
//! lines keep insertion order for display. Every operation is a single
//! synchronous mutation, visible immediately to all readers.

pub mod money;


use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{CartLine, Product};
use tracing::debug;

/// Largest quantity accepted from direct input editing (the quantity
/// field in the cart panel is two digits wide)
const MAX_INPUT_QUANTITY: i64 = 99;

/// The cart's quantity-per-product ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`: increments the existing line, or opens a
    /// new line with quantity 1. Safe to call repeatedly.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => {
                line.quantity += 1;
                debug!(product_id = product.id, quantity = line.quantity, "cart line incremented");
            }
            None => {
                self.lines.push(CartLine::new(product));
                debug!(product_id = product.id, "cart line opened");
            }
        }
    }

    /// Overwrite a line's quantity. A quantity <= 0 removes the line.
    ///
    /// Edits only apply to lines that exist: an absent product id is a
    /// silent no-op even for positive quantities, so a quantity edit can
    /// never resurrect a removed line. Only `add` creates lines.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            debug!(product_id, quantity, "cart line quantity set");
        }
    }

    /// Delete the line for `product_id`; no-op when absent
    pub fn remove(&mut self, product_id: i64) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() != before {
            debug!(product_id, "cart line removed");
        }
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of price x quantity over all lines, in cents. Integer
    /// accumulation, so no float drift however many lines there are.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::total_cents).sum()
    }

    /// Subtotal as a 2-dp decimal for display
    pub fn subtotal(&self) -> Decimal {
        money::cents_to_decimal(self.subtotal_cents())
    }

    /// Sum of quantities across all lines (the badge count, not the line
    /// count)
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Parse a raw quantity edit from the cart panel's text input.
///
/// Non-digit characters are stripped; an empty result parses to 0 (which
/// removes the line). Values past the two-digit cap are rejected and the
/// edit is ignored. Malformed input is never an error.
pub fn parse_quantity_input(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Some(0);
    }
    let value: i64 = digits.parse().ok()?;
    (value <= MAX_INPUT_QUANTITY).then_some(value)
}
