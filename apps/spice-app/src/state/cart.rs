//! # Cart State
//!
//! The customer's cart for this session plus the coupon table it checks
//! codes against.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   add_to_cart ──────┐                                                   │
//! │   update_quantity ──┤                                                   │
//! │   remove_from_cart ─┼──► with_cart_mut ──► CartLedger ──► CartResponse  │
//! │   apply_coupon ─────┤        (lock)                                     │
//! │   clear_cart ───────┘                                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is never persisted; a restart starts with an empty cart.

use std::sync::{Arc, Mutex, PoisonError};

use spice_core::{CartLedger, CouponTable, TaxRate};

#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<CartLedger>>,
    coupons: CouponTable,
}

impl CartState {
    /// An empty cart at the given tax rate, checked against the house coupons.
    pub fn new(tax_rate: TaxRate) -> Self {
        Self::with_coupons(tax_rate, CouponTable::default())
    }

    pub fn with_coupons(tax_rate: TaxRate, coupons: CouponTable) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(CartLedger::with_tax_rate(tax_rate))),
            coupons,
        }
    }

    pub fn coupons(&self) -> &CouponTable {
        &self.coupons
    }

    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|c| CartTotals::from(c));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartLedger) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&item));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartLedger) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(spice_core::GST_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spice_core::{MenuCategory, MenuItem};

    fn chai() -> MenuItem {
        MenuItem {
            id: "d2".to_string(),
            name: "Masala Chai".to_string(),
            description: String::new(),
            price_cents: 7_900,
            category: MenuCategory::Drinks,
            image: String::new(),
            is_veg: true,
            spice_level: 0,
        }
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::default();
        let other = state.clone();

        state.with_cart_mut(|c| c.add(&chai()));

        assert_eq!(other.with_cart(|c| c.quantity_of("d2")), 1);
    }

    #[test]
    fn test_coupon_applied_through_state() {
        let state = CartState::default();
        let applied = state.with_cart_mut(|c| {
            c.add(&chai());
            c.apply_coupon(state.coupons(), "spice10")
        });

        assert!(applied);
        assert_eq!(state.with_cart(|c| c.discount_percent()), 10);
    }

    #[test]
    fn test_custom_tax_rate() {
        let state = CartState::new(TaxRate::from_bps(1800));
        state.with_cart_mut(|c| c.add(&chai()));
        assert_eq!(state.with_cart(|c| c.tax().cents()), 1_422);
    }
}
