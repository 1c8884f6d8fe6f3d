//! # Dashboard Command

use tracing::debug;

use crate::state::DataState;
use spice_core::DashboardStats;

/// Headline counts and the five newest orders.
pub fn get_dashboard(data: &DataState) -> DashboardStats {
    debug!("get_dashboard command");
    data.with_data(|d| DashboardStats::collect(&d.orders, &d.reservations, &d.menu))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::order::place_order;
    use crate::test_support::session;

    #[tokio::test]
    async fn test_dashboard_defaults() {
        let s = session().await;

        let stats = get_dashboard(&s.data);

        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.approved_orders, 1);
        assert_eq!(stats.total_reservations, 1);
        assert_eq!(stats.menu_items, 8);
        assert_eq!(stats.recent_orders[0].id, "ORD001");
    }

    #[tokio::test]
    async fn test_recent_orders_capped() {
        let s = session().await;
        add_to_cart(&s.data, &s.cart, "d2".to_string()).unwrap();
        for _ in 0..4 {
            place_order(&s.db, &s.cart, &s.data, None).await.unwrap();
        }

        let stats = get_dashboard(&s.data);

        assert_eq!(stats.total_orders, 6);
        assert_eq!(stats.pending_orders, 5);
        assert_eq!(stats.recent_orders.len(), 5);
        assert_eq!(stats.recent_orders[0].id, "ORD006");
    }
}
