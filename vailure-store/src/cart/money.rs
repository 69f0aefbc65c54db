//! Money utilities
//!
//! The ledger carries monetary amounts as integer cents; conversion to a
//! 2-dp decimal happens only at the presentation boundary.

use rust_decimal::Decimal;

/// Convert integer cents to a 2-dp decimal
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Render integer cents as a plain "123.45" string
pub fn format_cents(cents: i64) -> String {
    cents_to_decimal(cents).to_string()
}
