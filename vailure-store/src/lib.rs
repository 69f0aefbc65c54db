//! Vailure storefront state engine
//!
//! Owned-state stores for catalog browsing: the filter engine, the cart
//! ledger, and selection/visibility state, plus the `Storefront` aggregate
//! that wires them together for a presentation layer. Every store is an
//! independently constructible value so each can be unit-tested without a
//! rendering environment.

pub mod cart;
pub mod filter;
pub mod selection;
pub mod storefront;

// Re-exports
pub use cart::{CartLedger, parse_quantity_input};
pub use filter::{FilterState, visible};
pub use selection::{CONFIRM_WINDOW_MS, QuickViewPhase, SelectionState};
pub use storefront::Storefront;
