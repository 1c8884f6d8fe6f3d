//! # Coupon Resolver
//!
//! Maps coupon codes to discount percentages.
//!
//! Lookups are case-insensitive and ignore surrounding whitespace, so
//! `"spice10"`, `" SPICE10 "` and `"Spice10"` all resolve the same way.

use std::collections::HashMap;

use crate::validation::{validate_discount_percent, ValidationResult};

/// Codes accepted at checkout.
const DEFAULT_COUPONS: &[(&str, u8)] = &[("SPICE10", 10)];

/// A table of coupon codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponTable {
    // Keys are stored upper-cased.
    codes: HashMap<String, u8>,
}

impl Default for CouponTable {
    /// The production table.
    fn default() -> Self {
        CouponTable {
            codes: DEFAULT_COUPONS
                .iter()
                .map(|(code, pct)| (code.to_ascii_uppercase(), *pct))
                .collect(),
        }
    }
}

impl CouponTable {
    /// Builds a table from `(code, percent)` pairs.
    ///
    /// Every percentage must be within 0..=100. Later duplicates win.
    pub fn new<I, S>(entries: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<str>,
    {
        let mut codes = HashMap::new();
        for (code, pct) in entries {
            validate_discount_percent(pct)?;
            codes.insert(normalize(code.as_ref()), pct);
        }
        Ok(CouponTable { codes })
    }

    /// Returns the discount percentage for `code`, if it is a valid coupon.
    pub fn resolve(&self, code: &str) -> Option<u8> {
        self.codes.get(&normalize(code)).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLedger;

    #[test]
    fn test_default_table_is_case_insensitive() {
        let coupons = CouponTable::default();
        assert_eq!(coupons.resolve("SPICE10"), Some(10));
        assert_eq!(coupons.resolve("spice10"), Some(10));
        assert_eq!(coupons.resolve(" Spice10 "), Some(10));
        assert_eq!(coupons.resolve("BOGUS"), None);
        assert_eq!(coupons.resolve(""), None);
        assert_eq!(coupons.len(), 1);
    }

    #[test]
    fn test_same_code_different_case_same_result() {
        let coupons = CouponTable::default();
        let mut upper = CartLedger::new();
        let mut lower = CartLedger::new();

        upper.apply_coupon(&coupons, "SPICE10");
        lower.apply_coupon(&coupons, "spice10");

        assert_eq!(upper.discount_percent(), lower.discount_percent());
    }

    #[test]
    fn test_second_valid_code_overwrites() {
        let coupons = CouponTable::new([("SPICE10", 10), ("FEAST25", 25)]).unwrap();
        let mut cart = CartLedger::new();

        assert!(cart.apply_coupon(&coupons, "FEAST25"));
        assert!(cart.apply_coupon(&coupons, "spice10"));

        assert_eq!(cart.discount_percent(), 10);
    }

    #[test]
    fn test_table_rejects_percent_over_100() {
        assert!(CouponTable::new([("FREE", 100)]).is_ok());
        assert!(CouponTable::new([("TOOMUCH", 101)]).is_err());
    }
}
