//! # Money Module
//!
//! Provides the `Money` type for menu prices, cart totals and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Cart with Butter Chicken (449) + Mango Lassi (149), 5% GST:           │
//! │    598 * 0.05 = 29.900000000000002  ❌ in floating point                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise)                              │
//! │    59800 paise * 500 bps / 10000 = 2990 paise = 29.90 exactly          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use spice_core::money::Money;
//!
//! let price = Money::from_major(449);   // ₹449.00
//! let line = price * 2;                 // ₹898.00
//! assert_eq!(line.cents(), 89_800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of a discount can be expressed directly
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: persisted as a bare integer
///
/// ## Where Money Flows
/// ```text
/// MenuItem.price_cents ──► CartLine.unit_price ──► CartLine.line_total
///                                                        │
///        CartLedger.subtotal ◄───────────────────────────┘
///              │
///              ├──► tax (5%)        ──┐
///              ├──► discount (coupon) ├──► CartLedger.total ──► Order.total_cents
///              └──────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use spice_core::money::Money;
    ///
    /// let price = Money::from_cents(14_900); // ₹149.00
    /// assert_eq!(price.cents(), 14_900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Menu prices are whole rupees, so this is the common constructor
    /// for seed data and tests.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at the given rate, rounding half up to a minor unit.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    ///
    /// ```rust
    /// use spice_core::money::Money;
    /// use spice_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_major(598);
    /// let gst = subtotal.calculate_tax(TaxRate::from_bps(500));
    /// assert_eq!(gst.cents(), 2_990); // ₹29.90
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.portion_bps(rate.bps())
    }

    /// Returns `percent`% of this amount, rounding half up to a minor unit.
    ///
    /// This is the discount amount, not the discounted price.
    ///
    /// ```rust
    /// use spice_core::money::Money;
    ///
    /// let subtotal = Money::from_major(598);
    /// assert_eq!(subtotal.percent(10).cents(), 5_980); // ₹59.80
    /// ```
    pub fn percent(&self, percent: u8) -> Money {
        self.portion_bps(u32::from(percent) * 100)
    }

    fn portion_bps(&self, bps: u32) -> Money {
        // i128 so very large subtotals cannot overflow the intermediate product
        let portion = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(portion as i64)
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering in rupees.
///
/// The front end formats with the configured currency; see
/// `ConfigState::format_currency` in the app crate.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_parts() {
        let money = Money::from_major(449);
        assert_eq!(money.cents(), 44_900);
        assert_eq!(money.major(), 449);
        assert_eq!(money.minor(), 0);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
        assert_eq!(negative.minor(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(62_790).to_string(), "₹627.90");
        assert_eq!(Money::from_cents(5).to_string(), "₹0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_gst_on_sample_cart() {
        let subtotal = Money::from_major(598);
        let gst = subtotal.calculate_tax(TaxRate::from_bps(500));
        assert_eq!(gst.cents(), 2_990);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // ₹0.10 at 5% = 0.5 paise → 1 paisa
        let tax = Money::from_cents(10).calculate_tax(TaxRate::from_bps(500));
        assert_eq!(tax.cents(), 1);
        // ₹0.09 at 5% = 0.45 paise → 0
        let tax = Money::from_cents(9).calculate_tax(TaxRate::from_bps(500));
        assert_eq!(tax.cents(), 0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(Money::from_major(598).percent(10).cents(), 5_980);
        assert_eq!(Money::from_major(598).percent(0), Money::zero());
        assert_eq!(Money::from_major(598).percent(100), Money::from_major(598));
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);
        assert_eq!((a + b).cents(), 1_500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3_000);
        assert_eq!(a.multiply_quantity(2).cents(), 2_000);
        assert_eq!(a.multiply_quantity(i64::MAX).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MAX) + a).cents(), i64::MAX);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_major(20));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(44_900)).unwrap();
        assert_eq!(json, "44900");
    }
}
