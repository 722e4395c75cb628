//! Product Repository Trait
//!
//! Defines the persistence abstraction for products.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::CatalogError;
use super::product::{NewProduct, Product};
use crate::domain::shared::ProductId;

/// Repository trait for Product persistence.
///
/// This is a domain interface (port) implemented by infrastructure adapters
/// (SQLite, in-memory). Every adapter must honour the same contract so they
/// can be swapped at startup.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product in the store, ordered by id.
    ///
    /// An empty store yields an empty vector.
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Find a product by id.
    ///
    /// Returns `Ok(None)` for any id that is not present.
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Add a product and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the store rejects the write.
    async fn add_product(&self, product: NewProduct) -> Result<Product, CatalogError>;

    /// Replace name, price and description of an existing product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UpdateOnMissingProduct` if `product.id` is not
    /// present. This is never an upsert.
    async fn update_product(&self, product: &Product) -> Result<(), CatalogError>;

    /// Delete a product by id. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` only if the store fails.
    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError>;
}
