//! # Order Commands
//!
//! Checkout for customers and order review for the admin panel.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, DataState, DbState};
use spice_core::{CoreError, Order, OrderStatus, StatusFilter};
use spice_store::CollectionKey;

/// Admin order list query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    #[serde(default)]
    pub status: StatusFilter,
    /// Matches customer name or order id, case-insensitive.
    #[serde(default)]
    pub search: String,
}

/// Turns the current cart into a pending order.
///
/// ## Checkout Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  1. Refuse an empty cart                                                │
/// │  2. Build the order from the cart (next ORD id, today, Pending)         │
/// │  3. Prepend it to the order book                                        │
/// │  4. Persist the orders collection                                       │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The cart is left as it is.
pub async fn place_order(
    db: &DbState,
    cart: &CartState,
    data: &DataState,
    customer_name: Option<String>,
) -> Result<Order, ApiError> {
    debug!(customer = ?customer_name, "place_order command");

    let ledger = cart.with_cart(|c| c.clone());
    if ledger.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let order = data
        .commit(db.inner(), CollectionKey::Orders, |d| {
            Ok::<_, ApiError>(d.orders.submit(customer_name.as_deref(), &ledger))
        })
        .await?;

    info!(
        order_id = %order.id,
        total_cents = order.total_cents,
        "Order placed"
    );

    Ok(order)
}

pub fn list_orders(data: &DataState, query: OrderQuery) -> Vec<Order> {
    debug!(status = ?query.status, search = %query.search, "list_orders command");

    data.with_data(|d| {
        d.orders
            .filter(query.status, &query.search)
            .into_iter()
            .cloned()
            .collect()
    })
}

pub fn get_order(data: &DataState, id: String) -> Result<Order, ApiError> {
    debug!(id = %id, "get_order command");

    data.with_data(|d| d.orders.get(&id).cloned())
        .ok_or_else(|| ApiError::not_found("Order", &id))
}

pub async fn update_order_status(
    db: &DbState,
    data: &DataState,
    id: String,
    status: OrderStatus,
) -> Result<(), ApiError> {
    debug!(id = %id, status = %status, "update_order_status command");

    data.commit(db.inner(), CollectionKey::Orders, |d| {
        d.orders.update_status(&id, status).map_err(ApiError::from)
    })
    .await?;

    info!(order_id = %id, status = %status, "Order status changed");
    Ok(())
}

/// Removes an order. Returns `false` if no order had that id.
pub async fn delete_order(db: &DbState, data: &DataState, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_order command");

    if data.with_data(|d| d.orders.get(&id).is_none()) {
        return Ok(false);
    }

    let removed = data
        .commit(db.inner(), CollectionKey::Orders, |d| {
            Ok::<_, ApiError>(d.orders.delete(&id))
        })
        .await?;
    info!(order_id = %id, "Order deleted");

    Ok(removed)
}
