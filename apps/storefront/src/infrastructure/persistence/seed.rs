//! Startup seed data for the product and order stores.

use crate::domain::catalog::{NewProduct, Product};
use crate::domain::ordering::{Order, OrderStatus};
use crate::domain::shared::{OrderId, ProductId, Timestamp};

/// Development catalog loaded by the in-memory product store (ids 1..=20).
const CATALOG: [(&str, f64, &str); 20] = [
    ("Hair Brush", 3.00, "A fashionable product for combing your hair"),
    ("Cat Treats", 6.50, "Five paws up for the best treats"),
    ("Headphones", 56.99, "Award winning headphones"),
    ("Notebook", 2.50, "A handy notebook for your thoughts"),
    ("Travel Mug", 15.00, "Keeps your drinks hot or cold"),
    ("Bluetooth Speaker", 29.99, "Portable sound for any occasion"),
    ("Yoga Mat", 25.00, "Comfortable mat for your yoga practice"),
    ("Water Bottle", 10.00, "Stay hydrated on the go"),
    ("Desk Lamp", 18.00, "A stylish lamp for your workspace"),
    ("Sunglasses", 50.00, "Protect your eyes in style"),
    ("Fitness Tracker", 70.00, "Track your health and fitness goals"),
    ("Instant Pot", 80.00, "Versatile cooker for quick meals"),
    ("Running Shoes", 120.00, "Comfortable shoes for long runs"),
    ("Electric Toothbrush", 40.00, "Keep your teeth clean and healthy"),
    ("Wireless Charger", 25.00, "Conveniently charge your devices"),
    ("Portable Power Bank", 20.00, "Charge your devices on the go"),
    ("Smart Thermostat", 150.00, "Control your home temperature remotely"),
    ("Gaming Headset", 60.00, "Enhance your gaming experience"),
    ("Kitchen Scale", 15.00, "Accurate measurements for your recipes"),
    ("Electric Kettle", 30.00, "Boil water quickly and efficiently"),
];

/// The 20-item development catalog with ids 1..=20.
#[must_use]
pub fn catalog_seed() -> Vec<Product> {
    (1_i64..)
        .zip(CATALOG)
        .map(|(id, (name, price, description))| Product::new(id, name, price, description))
        .collect()
}

/// Products inserted into an empty database on first start.
#[must_use]
pub fn database_seed() -> Vec<NewProduct> {
    ["G", "H", "I"]
        .into_iter()
        .map(|suffix| NewProduct::new(format!("Test product {suffix}"), 2.00, " Test"))
        .collect()
}

/// The three sample orders, dated relative to `now`.
///
/// Line items are copies of catalog entries, so they must be built from
/// [`catalog_seed`].
#[must_use]
pub fn order_seed(now: Timestamp) -> Vec<Order> {
    let catalog = catalog_seed();
    let pick = |ids: &[i64]| -> Vec<Product> {
        ids.iter()
            .filter_map(|id| catalog.iter().find(|p| p.id == ProductId::new(*id)).cloned())
            .collect()
    };

    vec![
        Order::reconstitute(
            OrderId::new(1),
            now.days_before(5),
            OrderStatus::Delivered,
            pick(&[1, 2, 20, 16]),
        ),
        Order::reconstitute(
            OrderId::new(2),
            now.days_before(2),
            OrderStatus::Processing,
            pick(&[3, 4, 10, 18]),
        ),
        Order::reconstitute(
            OrderId::new(3),
            now,
            OrderStatus::Pending,
            pick(&[2, 3, 17, 11]),
        ),
    ]
}
