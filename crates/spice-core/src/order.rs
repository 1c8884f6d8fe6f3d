//! # Orders
//!
//! Turning a cart into an order, and the admin-side order list.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Order Flow                                     │
//! │                                                                         │
//! │   CartLedger ──► OrderSubmitter::place_order ──► Order { Pending }      │
//! │                         │                             │                 │
//! │                  TaggedSequence                 OrderBook::insert       │
//! │                  ORD001, ORD002, ...           (newest first)           │
//! │                                                       │                 │
//! │                                   admin: update_status / delete         │
//! │                                                                         │
//! │   Pending ◄──► Approved ◄──► Rejected   (any state to any state)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placing an order snapshots the cart. The cart itself is left untouched;
//! clearing it is the caller's decision.

use chrono::{Local, NaiveDate};

use crate::cart::CartLedger;
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, OrderStatus, ReviewStatus, StatusFilter};
use crate::{DEFAULT_CUSTOMER_LABEL, ORDER_ID_TAG};

// =============================================================================
// Tagged Sequence
// =============================================================================

/// Generates ids of the form `<TAG><n>` with `n` zero-padded to three digits.
///
/// Seeded from the ids already in a collection so a reloaded store never
/// hands out a number twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSequence {
    tag: String,
    next: u64,
}

impl TaggedSequence {
    /// A fresh sequence starting at 1.
    pub fn new(tag: impl Into<String>) -> Self {
        TaggedSequence {
            tag: tag.into(),
            next: 1,
        }
    }

    /// Starts after the highest numeric suffix among `ids` carrying `tag`.
    ///
    /// Ids with another prefix or a non-numeric suffix are ignored.
    pub fn seeded_from<'a, I>(tag: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tag = tag.into();
        let highest = ids
            .into_iter()
            .filter_map(|id| id.strip_prefix(tag.as_str()))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        TaggedSequence {
            tag,
            next: highest + 1,
        }
    }

    /// The id the next call to [`advance`](Self::advance) will return.
    pub fn peek(&self) -> String {
        self.format(self.next)
    }

    /// Returns the next id and moves past it.
    pub fn advance(&mut self) -> String {
        let id = self.format(self.next);
        self.next += 1;
        id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn format(&self, n: u64) -> String {
        format!("{}{:03}", self.tag, n)
    }
}

// =============================================================================
// Order Submitter
// =============================================================================

/// Builds [`Order`] records from a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmitter {
    sequence: TaggedSequence,
}

impl Default for OrderSubmitter {
    fn default() -> Self {
        Self::new(TaggedSequence::new(ORDER_ID_TAG))
    }
}

impl OrderSubmitter {
    pub fn new(sequence: TaggedSequence) -> Self {
        OrderSubmitter { sequence }
    }

    /// A submitter whose ids continue after those in `orders`.
    pub fn continuing(orders: &[Order]) -> Self {
        Self::new(TaggedSequence::seeded_from(
            ORDER_ID_TAG,
            orders.iter().map(|o| o.id.as_str()),
        ))
    }

    /// Places an order dated today.
    pub fn place_order(&mut self, customer: Option<&str>, cart: &CartLedger) -> Order {
        self.place_order_on(customer, cart, Local::now().date_naive())
    }

    /// Places an order with an explicit date.
    ///
    /// A missing or blank customer name is recorded as
    /// [`DEFAULT_CUSTOMER_LABEL`].
    pub fn place_order_on(
        &mut self,
        customer: Option<&str>,
        cart: &CartLedger,
        date: NaiveDate,
    ) -> Order {
        let customer_name = customer
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_LABEL)
            .to_string();

        Order {
            id: self.sequence.advance(),
            customer_name,
            items: cart.items_summary(),
            total_cents: cart.total().cents(),
            date,
            status: ReviewStatus::Pending,
        }
    }

    pub fn next_id(&self) -> String {
        self.sequence.peek()
    }
}

/// Sets an order's status. Every transition is allowed.
pub fn update_status(order: &mut Order, status: OrderStatus) {
    order.status = status;
}

// =============================================================================
// Order Book
// =============================================================================

/// The admin order list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
    submitter: OrderSubmitter,
}

impl OrderBook {
    /// Wraps a loaded collection. New ids continue after the highest stored one.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let submitter = OrderSubmitter::continuing(&orders);
        OrderBook { orders, submitter }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Adds an order at the top of the list.
    pub fn insert(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Places an order for `cart` and records it.
    pub fn submit(&mut self, customer: Option<&str>, cart: &CartLedger) -> Order {
        let order = self.submitter.place_order(customer, cart);
        self.insert(order.clone());
        order
    }

    /// Same as [`submit`](Self::submit) with an explicit date.
    pub fn submit_on(&mut self, customer: Option<&str>, cart: &CartLedger, date: NaiveDate) -> Order {
        let order = self.submitter.place_order_on(customer, cart, date);
        self.insert(order.clone());
        order
    }

    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> CoreResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;
        update_status(order, status);
        Ok(())
    }

    /// Removes an order. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        self.orders.len() != before
    }

    /// Orders matching `filter` whose customer name or id contains `search`
    /// (case-insensitive). A blank search matches everything.
    pub fn filter(&self, filter: StatusFilter, search: &str) -> Vec<&Order> {
        let needle = search.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| filter.matches(o.status))
            .filter(|o| {
                needle.is_empty()
                    || o.customer_name.to_lowercase().contains(&needle)
                    || o.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The `n` newest orders.
    pub fn recent(&self, n: usize) -> &[Order] {
        &self.orders[..n.min(self.orders.len())]
    }

    pub fn count_with_status(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// The id the next submitted order will get.
    pub fn next_id(&self) -> String {
        self.submitter.next_id()
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::CouponTable;
    use crate::money::Money;
    use crate::types::{MenuCategory, MenuItem};

    fn dish(id: &str, name: &str, rupees: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price_cents: Money::from_major(rupees).cents(),
            category: MenuCategory::MainCourse,
            image: String::new(),
            is_veg: true,
            spice_level: 1,
        }
    }

    fn sample_cart() -> CartLedger {
        let mut cart = CartLedger::new();
        cart.add(&dish("m1", "Butter Chicken", 449));
        cart.add(&dish("d1", "Mango Lassi", 149));
        cart
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
    }

    fn stored(id: &str, customer: &str, status: ReviewStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_name: customer.to_string(),
            items: "Paneer Tikka x2".to_string(),
            total_cents: 59_800,
            date: NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
            status,
        }
    }

    #[test]
    fn test_sequence_seeded_from_existing_ids() {
        let seq = TaggedSequence::seeded_from("ORD", ["ORD001", "ORD002", "RES009", "ORDxyz"]);
        assert_eq!(seq.peek(), "ORD003");

        let empty = TaggedSequence::seeded_from("RES", std::iter::empty());
        assert_eq!(empty.peek(), "RES001");
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = TaggedSequence::new("ORD");
        let a = seq.advance();
        let b = seq.advance();
        assert_eq!((a.as_str(), b.as_str()), ("ORD001", "ORD002"));
        assert_eq!(seq.tag(), "ORD");
    }

    #[test]
    fn test_sequence_handles_wide_numbers() {
        let mut seq = TaggedSequence::seeded_from("ORD", ["ORD4821"]);
        assert_eq!(seq.advance(), "ORD4822");
    }

    #[test]
    fn test_place_order_snapshots_cart() {
        let cart = sample_cart();
        let mut submitter = OrderSubmitter::default();

        let order = submitter.place_order_on(None, &cart, day());

        assert_eq!(order.id, "ORD001");
        assert_eq!(order.customer_name, DEFAULT_CUSTOMER_LABEL);
        assert_eq!(order.items, "Butter Chicken x1, Mango Lassi x1");
        assert_eq!(order.total_price(), Money::from_major_minor(627, 90));
        assert_eq!(order.status, ReviewStatus::Pending);
        assert_eq!(order.date, day());
        // Submission leaves the cart alone.
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_same_cart_placed_twice_gets_new_ids() {
        let cart = sample_cart();
        let mut submitter = OrderSubmitter::default();

        let a = submitter.place_order_on(Some("Ravi"), &cart, day());
        let b = submitter.place_order_on(Some("Ravi"), &cart, day());

        assert_ne!(a.id, b.id);
        assert_eq!((a.id.as_str(), b.id.as_str()), ("ORD001", "ORD002"));
        assert_eq!(a.items, b.items);
        assert_eq!(a.total_cents, b.total_cents);
        assert_eq!(submitter.next_id(), "ORD003");
    }

    #[test]
    fn test_place_order_with_coupon_total() {
        let mut cart = sample_cart();
        cart.apply_coupon(&CouponTable::default(), "SPICE10");

        let order = OrderSubmitter::default().place_order_on(Some("Ravi"), &cart, day());

        assert_eq!(order.total_cents, 56_810);
        assert_eq!(order.customer_name, "Ravi");
    }

    #[test]
    fn test_blank_customer_falls_back_to_guest() {
        let order = OrderSubmitter::default().place_order_on(Some("   "), &sample_cart(), day());
        assert_eq!(order.customer_name, DEFAULT_CUSTOMER_LABEL);
    }

    #[test]
    fn test_status_transitions_are_permissive() {
        let mut order = stored("ORD001", "John Doe", ReviewStatus::Pending);

        update_status(&mut order, ReviewStatus::Approved);
        assert_eq!(order.status, ReviewStatus::Approved);

        update_status(&mut order, ReviewStatus::Rejected);
        update_status(&mut order, ReviewStatus::Pending);
        assert_eq!(order.status, ReviewStatus::Pending);
    }

    #[test]
    fn test_book_submit_prepends_and_continues_ids() {
        let mut book = OrderBook::from_orders(vec![
            stored("ORD002", "Jane Smith", ReviewStatus::Approved),
            stored("ORD001", "John Doe", ReviewStatus::Pending),
        ]);
        assert_eq!(book.next_id(), "ORD003");

        let order = book.submit_on(None, &sample_cart(), day());

        assert_eq!(order.id, "ORD003");
        assert_eq!(book.orders()[0].id, "ORD003");
        assert_eq!(book.len(), 3);
        assert_eq!(book.next_id(), "ORD004");
    }

    #[test]
    fn test_book_update_and_delete() {
        let mut book = OrderBook::from_orders(vec![stored("ORD001", "John Doe", ReviewStatus::Pending)]);

        book.update_status("ORD001", ReviewStatus::Rejected).unwrap();
        assert_eq!(book.get("ORD001").unwrap().status, ReviewStatus::Rejected);

        assert_eq!(
            book.update_status("ORD999", ReviewStatus::Approved),
            Err(CoreError::OrderNotFound("ORD999".to_string()))
        );

        assert!(book.delete("ORD001"));
        assert!(!book.delete("ORD001"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_book_filter_by_status_and_search() {
        let book = OrderBook::from_orders(vec![
            stored("ORD003", "Ravi Kumar", ReviewStatus::Pending),
            stored("ORD002", "Jane Smith", ReviewStatus::Approved),
            stored("ORD001", "John Doe", ReviewStatus::Pending),
        ]);

        let pending = book.filter(StatusFilter::Only(ReviewStatus::Pending), "");
        assert_eq!(pending.len(), 2);

        let by_name = book.filter(StatusFilter::All, "jane");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "ORD002");

        let by_id = book.filter(StatusFilter::Only(ReviewStatus::Pending), "ord001");
        assert_eq!(by_id.len(), 1);

        assert!(book.filter(StatusFilter::Only(ReviewStatus::Rejected), "").is_empty());
        assert_eq!(book.count_with_status(ReviewStatus::Pending), 2);
    }

    #[test]
    fn test_book_recent() {
        let book = OrderBook::from_orders(vec![
            stored("ORD002", "Jane Smith", ReviewStatus::Approved),
            stored("ORD001", "John Doe", ReviewStatus::Pending),
        ]);

        assert_eq!(book.recent(5).len(), 2);
        assert_eq!(book.recent(1)[0].id, "ORD002");
        assert!(book.recent(0).is_empty());
    }
}
