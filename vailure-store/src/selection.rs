//! Selection and visibility state
//!
//! Tracks which single product (if any) is under quick-view and whether
//! the cart panel / search bar are open. The three flags are independent;
//! cross-store rules (clearing the search query, adding to the cart) live
//! in the `Storefront` aggregate.

use serde::{Deserialize, Serialize};
use shared::Product;
use tracing::debug;

/// Cooldown after a confirmed add-to-cart. A second invocation inside the
/// window is ignored; once it elapses the quick-view auto-closes.
pub const CONFIRM_WINDOW_MS: i64 = 1000;

/// Quick-view lifecycle within the window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuickViewPhase {
    /// Modal open, no add in flight
    Browsing,
    /// Add-to-cart confirmed at `since_ms`; window pending
    Confirmed { since_ms: i64 },
}

/// The product under quick-view and its confirmation phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickView {
    pub product: Product,
    pub phase: QuickViewPhase,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    quick_view: Option<QuickView>,
    cart_panel_open: bool,
    search_bar_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quick_view(&self) -> Option<&QuickView> {
        self.quick_view.as_ref()
    }

    pub fn quick_view_product(&self) -> Option<&Product> {
        self.quick_view.as_ref().map(|qv| &qv.product)
    }

    pub fn is_cart_panel_open(&self) -> bool {
        self.cart_panel_open
    }

    pub fn is_search_bar_open(&self) -> bool {
        self.search_bar_open
    }

    /// Open the quick-view for `product`. Replaces any previous selection;
    /// coexists with the cart panel (the view treats it as modal-on-top).
    pub fn open_quick_view(&mut self, product: Product) {
        debug!(product_id = product.id, "quick-view opened");
        self.quick_view = Some(QuickView {
            product,
            phase: QuickViewPhase::Browsing,
        });
    }

    /// Clear the quick-view (explicit close, Escape, or confirmed add)
    pub fn close_quick_view(&mut self) {
        self.quick_view = None;
    }

    /// Toggle the cart panel; returns the new state
    pub fn toggle_cart_panel(&mut self) -> bool {
        self.cart_panel_open = !self.cart_panel_open;
        self.cart_panel_open
    }

    /// Toggle the search bar; returns the new state. The caller resets the
    /// query when this reports closed.
    pub fn toggle_search_bar(&mut self) -> bool {
        self.search_bar_open = !self.search_bar_open;
        self.search_bar_open
    }

    /// Record a confirmed add from the quick-view. Returns `false` when no
    /// quick-view is open or when the invocation lands inside the cooldown
    /// window of a previous one (double-submit guard).
    pub fn confirm_add(&mut self, now_ms: i64) -> bool {
        let Some(qv) = self.quick_view.as_mut() else {
            return false;
        };
        if let QuickViewPhase::Confirmed { since_ms } = qv.phase
            && now_ms - since_ms < CONFIRM_WINDOW_MS
        {
            debug!(product_id = qv.product.id, "add-to-cart ignored inside cooldown window");
            return false;
        }
        qv.phase = QuickViewPhase::Confirmed { since_ms: now_ms };
        true
    }

    /// Advance time-driven transitions: a confirmation whose window has
    /// elapsed auto-closes the quick-view.
    pub fn tick(&mut self, now_ms: i64) {
        if let Some(qv) = self.quick_view.as_ref()
            && let QuickViewPhase::Confirmed { since_ms } = qv.phase
            && now_ms - since_ms >= CONFIRM_WINDOW_MS
        {
            debug!(product_id = qv.product.id, "quick-view auto-closed after confirmation");
            self.quick_view = None;
        }
    }
}
