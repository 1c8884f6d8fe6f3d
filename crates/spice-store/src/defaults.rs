//! # Built-in Collections
//!
//! What a fresh install shows before anyone has edited anything: the house
//! menu, two sample orders and one sample booking. These are also the
//! fallbacks [`CollectionRepository::load`](crate::CollectionRepository::load)
//! is given when a stored collection is missing or unreadable.
//!
//! Users have no built-in collection here; the default admin account needs a
//! password hash and is created by the application layer.

use chrono::NaiveDate;
use spice_core::{MenuCategory, MenuItem, Money, Order, Reservation, RestaurantSettings, ReviewStatus};

#[allow(clippy::too_many_arguments)]
fn dish(
    id: &str,
    name: &str,
    description: &str,
    rupees: i64,
    category: MenuCategory,
    is_veg: bool,
    spice_level: u8,
    image_seed: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents: Money::from_major(rupees).cents(),
        category,
        image: format!("https://picsum.photos/seed/{image_seed}/400/300"),
        is_veg,
        spice_level,
    }
}

/// The house menu.
pub fn menu() -> Vec<MenuItem> {
    use MenuCategory::*;

    vec![
        dish(
            "s1",
            "Paneer Tikka",
            "Succulent paneer cubes marinated in spiced yogurt and grilled to perfection.",
            299,
            Starters,
            true,
            2,
            "paneertikka",
        ),
        dish(
            "s2",
            "Chicken Seekh Kebab",
            "Minced chicken blended with aromatic spices and grilled on skewers.",
            349,
            Starters,
            false,
            2,
            "chickenkebab",
        ),
        dish(
            "s3",
            "Hara Bhara Kebab",
            "Healthy and delicious spinach and green pea patties.",
            249,
            Starters,
            true,
            1,
            "harabhara",
        ),
        dish(
            "m1",
            "Butter Chicken",
            "Tender chicken in a rich, creamy tomato-based gravy.",
            449,
            MainCourse,
            false,
            1,
            "butterchicken",
        ),
        dish(
            "m2",
            "Dal Makhani",
            "Slow-cooked black lentils with cream and butter.",
            349,
            MainCourse,
            true,
            1,
            "dalmakhani",
        ),
        dish(
            "m5",
            "Chicken Biryani",
            "Fragrant basmati rice cooked with spiced chicken and herbs.",
            499,
            MainCourse,
            false,
            2,
            "chickenbiryani",
        ),
        dish(
            "d1",
            "Mango Lassi",
            "Refreshing yogurt-based drink with sweet mango pulp.",
            149,
            Drinks,
            true,
            0,
            "mangolassi",
        ),
        dish(
            "d2",
            "Masala Chai",
            "Traditional Indian spiced tea with milk.",
            79,
            Drinks,
            true,
            0,
            "masalachai",
        ),
    ]
}

fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 27).unwrap_or_default()
}

/// Two sample orders, newest first.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".to_string(),
            customer_name: "John Doe".to_string(),
            items: "Butter Chicken x1, Naan x2".to_string(),
            total_cents: Money::from_major(550).cents(),
            date: sample_date(),
            status: ReviewStatus::Pending,
        },
        Order {
            id: "ORD002".to_string(),
            customer_name: "Jane Smith".to_string(),
            items: "Paneer Tikka x2".to_string(),
            total_cents: Money::from_major(598).cents(),
            date: sample_date(),
            status: ReviewStatus::Approved,
        },
    ]
}

pub fn reservations() -> Vec<Reservation> {
    vec![Reservation {
        id: "RES001".to_string(),
        customer_name: "Alice Brown".to_string(),
        phone: "9876543210".to_string(),
        date: "2026-02-28".to_string(),
        time: "19:00".to_string(),
        guests: 4,
        status: ReviewStatus::Pending,
    }]
}

pub fn settings() -> RestaurantSettings {
    RestaurantSettings::default()
}
