//! Persistence Adapters
//!
//! Implementations of the product and order repository traits.
//!
//! - `SqliteProductRepository`: durable product store
//! - `InMemoryProductRepository`: product fake, seeded with the development catalog
//! - `InMemoryOrderRepository`: the only order store

pub mod in_memory_orders;
pub mod in_memory_products;
pub mod seed;
pub mod sqlite_products;

pub use in_memory_orders::InMemoryOrderRepository;
pub use in_memory_products::InMemoryProductRepository;
pub use sqlite_products::SqliteProductRepository;
