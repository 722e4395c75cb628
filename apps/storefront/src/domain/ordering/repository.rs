//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use crate::domain::catalog::Product;
use crate::domain::shared::{OrderId, ProductId};

/// Repository trait for Order persistence.
///
/// "Not found" is an ordinary outcome here: lookups return `Ok(None)` and
/// mutations return `Ok(false)`. `Err` is reserved for store failures.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create an empty pending order dated now, with the next id.
    ///
    /// Ids are unique for the lifetime of the store, including across
    /// concurrent callers, and never reused after deletion.
    async fn create_order(&self) -> Result<Order, OrderError>;

    /// Find an order by id.
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError>;

    /// Snapshot of every live order, ascending by id.
    async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Append a product snapshot to an order.
    ///
    /// Returns `Ok(false)` if the order does not exist.
    async fn add_product_to_order(
        &self,
        order_id: OrderId,
        product: Product,
    ) -> Result<bool, OrderError>;

    /// Remove the first line item carrying `product_id`.
    ///
    /// Returns `Ok(false)` if the order does not exist or holds no such
    /// product; the two causes are not distinguished.
    async fn remove_product_from_order(
        &self,
        order_id: OrderId,
        product_id: ProductId,
    ) -> Result<bool, OrderError>;

    /// Replace products, date and status of the order with `order.order_id`.
    ///
    /// Returns `Ok(false)` if no such order exists.
    async fn update_order(&self, order: &Order) -> Result<bool, OrderError>;

    /// Delete an order. Its id is never handed out again.
    ///
    /// Returns `Ok(false)` if no such order exists.
    async fn delete_order(&self, id: OrderId) -> Result<bool, OrderError>;
}
