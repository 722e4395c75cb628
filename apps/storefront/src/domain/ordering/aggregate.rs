//! Order Aggregate Root
//!
//! An order owns its line items outright. Each line item is a copy of a
//! product taken when it was added, so edits to the catalog afterwards never
//! show up here.

use serde::{Deserialize, Serialize};

use super::value_objects::OrderStatus;
use crate::domain::catalog::Product;
use crate::domain::shared::{OrderId, ProductId, Timestamp};

/// A customer order and its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Identifier assigned by the order store.
    pub order_id: OrderId,
    /// When the order was placed.
    pub order_date: Timestamp,
    /// Current status.
    pub status: OrderStatus,
    /// Line items in insertion order. Duplicates by product id are allowed.
    pub products: Vec<Product>,
}

impl Order {
    /// A fresh order: pending, no line items.
    #[must_use]
    pub const fn new(order_id: OrderId, order_date: Timestamp) -> Self {
        Self {
            order_id,
            order_date,
            status: OrderStatus::Pending,
            products: Vec::new(),
        }
    }

    /// Rebuild an order from all of its parts.
    #[must_use]
    pub const fn reconstitute(
        order_id: OrderId,
        order_date: Timestamp,
        status: OrderStatus,
        products: Vec<Product>,
    ) -> Self {
        Self {
            order_id,
            order_date,
            status,
            products,
        }
    }

    /// Append a line item. No deduplication.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove the first line item with `product_id`.
    ///
    /// Returns `false` when no line item matches.
    pub fn remove_product(&mut self, product_id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id == product_id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace products, date and status with those of `other`. The id is kept.
    pub fn apply_update(&mut self, other: &Self) {
        self.products.clone_from(&other.products);
        self.order_date = other.order_date;
        self.status = other.status;
    }

    /// Number of line items.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of line items carrying `product_id`.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> usize {
        self.products.iter().filter(|p| p.id == product_id).count()
    }

    /// Sum of line item prices.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        Product::new(id, format!("Product {id}"), 1.0, "")
    }

    fn empty_order() -> Order {
        Order::new(OrderId::new(1), Timestamp::now())
    }

    #[test]
    fn new_order_is_pending_and_empty() {
        let order = empty_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.products.is_empty());
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut order = empty_order();
        let mut first = product(7);
        first.name = "first".to_string();
        let mut second = product(7);
        second.name = "second".to_string();
        order.add_product(first);
        order.add_product(product(8));
        order.add_product(second);

        assert!(order.remove_product(ProductId::new(7)));

        assert_eq!(order.quantity_of(ProductId::new(7)), 1);
        assert_eq!(order.products[0].id, ProductId::new(8));
        assert_eq!(order.products[1].name, "second");
    }

    #[test]
    fn remove_missing_product_returns_false() {
        let mut order = empty_order();
        order.add_product(product(1));
        assert!(!order.remove_product(ProductId::new(9999)));
        assert_eq!(order.product_count(), 1);
    }

    #[test]
    fn apply_update_keeps_id() {
        let mut order = empty_order();
        order.add_product(product(1));
        let replacement = Order::reconstitute(
            OrderId::new(42),
            Timestamp::now().days_before(1),
            OrderStatus::Delivered,
            vec![product(2), product(3)],
        );

        order.apply_update(&replacement);

        assert_eq!(order.order_id, OrderId::new(1));
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.order_date, replacement.order_date);
        assert_eq!(order.products, replacement.products);
    }

    #[test]
    fn total_sums_line_items() {
        let mut order = empty_order();
        order.add_product(Product::new(1, "a", 3.0, ""));
        order.add_product(Product::new(2, "b", 6.5, ""));
        assert!((order.total() - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let order = empty_order();
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("orderId").is_some());
        assert!(json.get("orderDate").is_some());
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["products"], serde_json::json!([]));
    }
}
