//! Storefront aggregate
//!
//! Owns the mutable stores (filter inputs, cart ledger, selection state)
//! next to the immutable catalog and coordinates the few rules that span
//! more than one store. Exposes the event-handler surface the
//! presentation layer drives.

use crate::cart::{CartLedger, parse_quantity_input};
use crate::filter::FilterState;
use crate::selection::SelectionState;
use rust_decimal::Decimal;
use shared::{Catalog, Product, util};

#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    pub filter: FilterState,
    pub cart: CartLedger,
    pub selection: SelectionState,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            cart: CartLedger::new(),
            selection: SelectionState::new(),
        }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ========== Browsing ==========

    /// Products matching the active filters, in catalog order
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(self.catalog.products())
    }

    /// Category filter options ("All" first)
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.set_category(category);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.set_search(text);
    }

    /// Toggle the search bar. Closing it resets the query; the next open
    /// starts blank.
    pub fn toggle_search(&mut self) {
        if !self.selection.toggle_search_bar() {
            self.filter.clear_search();
        }
    }

    pub fn toggle_cart(&mut self) {
        self.selection.toggle_cart_panel();
    }

    // ========== Quick-view ==========

    /// Open the quick-view for a catalog product. Returns `false` for an
    /// unknown id.
    pub fn open_quick_view(&mut self, product_id: i64) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => {
                self.selection.open_quick_view(product.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_quick_view(&mut self) {
        self.selection.close_quick_view();
    }

    /// Escape closes the topmost surface: the quick-view modal when open,
    /// otherwise the cart panel.
    pub fn press_escape(&mut self) {
        if self.selection.quick_view().is_some() {
            self.selection.close_quick_view();
        } else if self.selection.is_cart_panel_open() {
            self.selection.toggle_cart_panel();
        }
    }

    /// Add-to-cart from the quick-view, guarded by the confirmation
    /// cooldown. Returns `true` when a unit was actually added.
    pub fn confirm_quick_view_add(&mut self) -> bool {
        self.confirm_quick_view_add_at(util::now_millis())
    }

    /// Cooldown-guarded add with an injected timestamp
    pub fn confirm_quick_view_add_at(&mut self, now_ms: i64) -> bool {
        let Some(product) = self.selection.quick_view_product().cloned() else {
            return false;
        };
        if !self.selection.confirm_add(now_ms) {
            return false;
        }
        self.cart.add(&product);
        true
    }

    /// Advance time-driven transitions (quick-view auto-close)
    pub fn tick(&mut self) {
        self.tick_at(util::now_millis());
    }

    pub fn tick_at(&mut self, now_ms: i64) {
        self.selection.tick(now_ms);
    }

    // ========== Cart ==========

    /// Direct add from the product grid. Returns `false` for an unknown id.
    pub fn add_to_cart(&mut self, product_id: i64) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => {
                let product = product.clone();
                self.cart.add(&product);
                true
            }
            None => false,
        }
    }

    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Apply a raw text edit from the quantity input; malformed or
    /// out-of-range edits are ignored.
    pub fn edit_quantity_input(&mut self, product_id: i64, raw: &str) {
        if let Some(quantity) = parse_quantity_input(raw) {
            self.cart.set_quantity(product_id, quantity);
        }
    }

    pub fn remove_from_cart(&mut self, product_id: i64) {
        self.cart.remove(product_id);
    }

    /// Header badge count (sum of quantities)
    pub fn cart_badge(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart subtotal as a 2-dp decimal
    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}
