//! # Cart Ledger
//!
//! The customer's cart: line items plus the active coupon discount, with all
//! monetary totals derived on read.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Menu "+" ───────────► add(item) ──────────► qty += 1 or push line     │
//! │                                                                         │
//! │  Cart "+" / "−" ─────► update_quantity(id, ±1) ─► qty ≤ 0 drops line   │
//! │                                                                         │
//! │  Cart trash icon ────► remove(id) ───────────► retain others           │
//! │                                                                         │
//! │  Coupon field ───────► apply_coupon(code) ───► discount_percent = n    │
//! │                                                                         │
//! │  "Back to menu" ─────► clear() ──────────────► empty, discount 0       │
//! │                                                                         │
//! │  NOTE: none of these fail. Unknown ids are no-ops.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! ```text
//! subtotal = Σ unit_price × quantity
//! tax      = subtotal × 5%
//! discount = subtotal × discount_percent%
//! total    = subtotal + tax − discount
//! ```
//! The discount is capped at 100% of the subtotal and tax is never negative,
//! so the total is never negative.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coupon::CouponTable;
use crate::money::Money;
use crate::types::{MenuItem, TaxRate};
use crate::MAX_LINE_QUANTITY;

/// A line in the cart.
///
/// Name and price are snapshotted when the dish is first added, so an admin
/// repricing a dish does not change an open cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    /// Always ≥ 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity: 1,
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// The order summary fragment, e.g. `"Butter Chicken x2"`.
    pub fn summary(&self) -> String {
        format!("{} x{}", self.name, self.quantity)
    }
}

/// The shopping cart for one session.
///
/// ## Invariants
/// - At most one line per menu item id, in first-added order
/// - Every line has quantity ≥ 1
/// - `discount_percent` is within 0..=100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLedger {
    lines: Vec<CartLine>,
    discount_percent: u8,
    tax_rate: TaxRate,
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CartLedger {
    /// Creates an empty cart taxed at GST (5%).
    pub fn new() -> Self {
        Self::with_tax_rate(crate::GST_RATE)
    }

    /// Creates an empty cart with a non-default tax rate.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        CartLedger {
            lines: Vec::new(),
            discount_percent: 0,
            tax_rate,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one of `item`, or bumps the quantity if it is already in the cart.
    ///
    /// Quantities stop at [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, item: &MenuItem) {
        match self.line_mut(&item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY),
            None => self.lines.push(CartLine::from_item(item)),
        }
    }

    /// Removes the line for `id`. No-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.item_id != id);
    }

    /// Adjusts the quantity of `id` by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line; anything above
    /// [`MAX_LINE_QUANTITY`] is capped. No-op if the id is not in the cart.
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        let Some(line) = self.line_mut(id) else {
            return;
        };

        let new_qty = line.quantity.saturating_add(delta);
        if new_qty > 0 {
            line.quantity = new_qty.min(MAX_LINE_QUANTITY);
        } else {
            self.remove(id);
        }
    }

    /// Empties the cart and drops any applied coupon.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_percent = 0;
    }

    /// Applies a coupon code from `coupons`.
    ///
    /// On a match the discount is replaced (codes never stack) and `true`
    /// is returned. On a miss the current discount is kept and `false` is
    /// returned.
    pub fn apply_coupon(&mut self, coupons: &CouponTable, code: &str) -> bool {
        match coupons.resolve(code) {
            Some(percent) => {
                self.discount_percent = percent;
                true
            }
            None => false,
        }
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.item_id == id)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct dishes.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Quantity of one dish (0 when absent). Drives the menu's per-dish counter.
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.item_id == id)
            .map_or(0, |l| l.quantity)
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Sum of all quantities (the badge on the cart icon).
    pub fn total_item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(self.tax_rate)
    }

    pub fn discount(&self) -> Money {
        self.subtotal().percent(self.discount_percent)
    }

    pub fn total(&self) -> Money {
        self.subtotal() + self.tax() - self.discount()
    }

    /// `"<name> x<qty>"` for every line, joined by `", "`.
    pub fn items_summary(&self) -> String {
        self.lines
            .iter()
            .map(CartLine::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Cart totals summary for command responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_item_count: i64,
    pub discount_percent: u8,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl From<&CartLedger> for CartTotals {
    fn from(cart: &CartLedger) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal.calculate_tax(cart.tax_rate);
        let discount = subtotal.percent(cart.discount_percent);
        CartTotals {
            line_count: cart.line_count(),
            total_item_count: cart.total_item_count(),
            discount_percent: cart.discount_percent,
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            discount_cents: discount.cents(),
            total_cents: (subtotal + tax - discount).cents(),
        }
    }
}
