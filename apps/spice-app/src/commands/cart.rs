//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   [Empty] ──add_to_cart──► [Has lines] ──place_order──► [Has lines]     │
//! │      ▲                        │    ▲                         │          │
//! │      │                update_quantity / apply_coupon         │          │
//! │      │                        │    │                         │          │
//! │      └──────── clear_cart ────┴────┴─────── clear_cart ──────┘          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placing an order does not empty the cart; the confirmation screen's
//! "back to menu" action calls [`clear_cart`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, DataState};
use spice_core::{CartLedger, CartLine, CartTotals};

/// Cart lines plus derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&CartLedger> for CartResponse {
    fn from(cart: &CartLedger) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    /// `false` when the code is unknown; the previous discount stays.
    pub applied: bool,
    pub cart: CartResponse,
}

pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one of a menu dish to the cart.
///
/// The dish's current name and price are copied into the line.
pub fn add_to_cart(
    data: &DataState,
    cart: &CartState,
    item_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let item = data
        .with_data(|d| d.menu.get(&item_id).cloned())
        .ok_or_else(|| ApiError::not_found("Menu item", &item_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add(&item);
        CartResponse::from(&*c)
    }))
}

/// Changes a line's quantity by `delta`; zero or below removes the line.
pub fn update_cart_quantity(cart: &CartState, item_id: String, delta: i64) -> CartResponse {
    debug!(item_id = %item_id, delta, "update_cart_quantity command");

    cart.with_cart_mut(|c| {
        c.update_quantity(&item_id, delta);
        CartResponse::from(&*c)
    })
}

pub fn remove_from_cart(cart: &CartState, item_id: String) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(&item_id);
        CartResponse::from(&*c)
    })
}

pub fn apply_coupon(cart: &CartState, code: String) -> CouponResponse {
    debug!(code = %code, "apply_coupon command");

    cart.with_cart_mut(|c| {
        let applied = c.apply_coupon(cart.coupons(), &code);
        CouponResponse {
            applied,
            cart: CartResponse::from(&*c),
        }
    })
}

/// Empties the cart and drops any coupon.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
