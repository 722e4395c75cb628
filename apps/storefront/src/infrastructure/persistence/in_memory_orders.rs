//! In-memory order repository.
//!
//! All state sits behind one lock, so id assignment and insertion happen
//! together and concurrent `create_order` calls never share an id.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::seed::order_seed;
use crate::domain::catalog::Product;
use crate::domain::ordering::{Order, OrderError, OrderRepository};
use crate::domain::shared::{OrderId, ProductId, Timestamp};

#[derive(Debug)]
struct OrderBook {
    orders: BTreeMap<OrderId, Order>,
    next_id: OrderId,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: OrderId::new(1),
        }
    }
}

/// In-memory implementation of `OrderRepository`.
///
/// Orders live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    book: RwLock<OrderBook>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository. The first order gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the three sample orders (ids 1..=3).
    #[must_use]
    pub fn seeded() -> Self {
        let repo = Self::new();
        for order in order_seed(Timestamp::now()) {
            repo.insert(order);
        }
        repo
    }

    /// Place a seed order and move the id counter past it.
    fn insert(&self, order: Order) {
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        if order.order_id >= book.next_id {
            book.next_id = order.order_id.next();
        }
        book.orders.insert(order.order_id, order);
    }

    /// Number of live orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.book
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .orders
            .len()
    }

    /// True if no orders are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self) -> Result<Order, OrderError> {
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        let order_id = book.next_id;
        book.next_id = order_id.next();

        let order = Order::new(order_id, Timestamp::now());
        book.orders.insert(order_id, order.clone());
        drop(book);

        tracing::debug!(order_id = %order_id, "Order created");
        Ok(order)
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let book = self.book.read().unwrap_or_else(PoisonError::into_inner);
        Ok(book.orders.get(&id).cloned())
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        let book = self.book.read().unwrap_or_else(PoisonError::into_inner);
        Ok(book.orders.values().cloned().collect())
    }

    async fn add_product_to_order(
        &self,
        order_id: OrderId,
        product: Product,
    ) -> Result<bool, OrderError> {
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        let Some(order) = book.orders.get_mut(&order_id) else {
            return Ok(false);
        };
        order.add_product(product);
        Ok(true)
    }

    async fn remove_product_from_order(
        &self,
        order_id: OrderId,
        product_id: ProductId,
    ) -> Result<bool, OrderError> {
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        Ok(book
            .orders
            .get_mut(&order_id)
            .is_some_and(|order| order.remove_product(product_id)))
    }

    async fn update_order(&self, order: &Order) -> Result<bool, OrderError> {
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        let Some(existing) = book.orders.get_mut(&order.order_id) else {
            return Ok(false);
        };
        existing.apply_update(order);
        Ok(true)
    }

    async fn delete_order(&self, id: OrderId) -> Result<bool, OrderError> {
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        let removed = book.orders.remove(&id).is_some();
        drop(book);

        if removed {
            tracing::debug!(order_id = %id, "Order deleted");
        }
        Ok(removed)
    }
}
