//! Admin dashboard overview.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::menu::MenuCatalog;
use crate::order::OrderBook;
use crate::reservation::ReservationBook;
use crate::types::{Order, ReviewStatus};
use crate::RECENT_ORDERS_LIMIT;

/// Headline counts plus the most recent orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub approved_orders: usize,
    pub total_reservations: usize,
    pub menu_items: usize,
    pub recent_orders: Vec<Order>,
}

impl DashboardStats {
    pub fn collect(orders: &OrderBook, reservations: &ReservationBook, menu: &MenuCatalog) -> Self {
        DashboardStats {
            total_orders: orders.len(),
            pending_orders: orders.count_with_status(ReviewStatus::Pending),
            approved_orders: orders.count_with_status(ReviewStatus::Approved),
            total_reservations: reservations.len(),
            menu_items: menu.len(),
            recent_orders: orders.recent(RECENT_ORDERS_LIMIT).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(n: u32, status: ReviewStatus) -> Order {
        Order {
            id: format!("ORD{n:03}"),
            customer_name: "Walk-in".to_string(),
            items: "Masala Chai x1".to_string(),
            total_cents: 8_295,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status,
        }
    }

    #[test]
    fn test_counts_and_recent_limit() {
        let orders = OrderBook::from_orders(
            (1..=7)
                .rev()
                .map(|n| {
                    let status = match n % 3 {
                        0 => ReviewStatus::Approved,
                        1 => ReviewStatus::Pending,
                        _ => ReviewStatus::Rejected,
                    };
                    order(n, status)
                })
                .collect(),
        );

        let stats = DashboardStats::collect(&orders, &ReservationBook::default(), &MenuCatalog::default());

        assert_eq!(stats.total_orders, 7);
        assert_eq!(stats.pending_orders, 3);
        assert_eq!(stats.approved_orders, 2);
        assert_eq!(stats.total_reservations, 0);
        assert_eq!(stats.menu_items, 0);
        assert_eq!(stats.recent_orders.len(), RECENT_ORDERS_LIMIT);
        assert_eq!(stats.recent_orders[0].id, "ORD007");
    }
}
