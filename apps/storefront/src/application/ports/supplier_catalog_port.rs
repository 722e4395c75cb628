//! Supplier Catalog Port (Driven Port)
//!
//! Interface to the third-party supplier's product catalog.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::dto::ProductDto;

/// Supplier catalog error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupplierError {
    /// Transport failure (connect, timeout, TLS).
    #[error("Supplier request failed: {0}")]
    Http(String),

    /// The supplier answered with a non-success status.
    #[error("Supplier returned {status} for {url}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not the expected JSON.
    #[error("Supplier response could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SupplierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Port for the supplier's product catalog.
///
/// Calls are made once; retry policy, if any, belongs to whoever wraps the port.
#[async_trait]
pub trait SupplierCatalogPort: Send + Sync {
    /// List the supplier's products.
    async fn get_products(&self) -> Result<Vec<ProductDto>, SupplierError>;

    /// Get a product by id. A missing product is `Ok(None)`.
    async fn get_product_by_id(&self, id: i64) -> Result<Option<ProductDto>, SupplierError>;

    /// Add a product; returns it as stored by the supplier.
    async fn add_product(&self, product: ProductDto) -> Result<ProductDto, SupplierError>;

    /// Replace a product.
    async fn update_product(&self, product: &ProductDto) -> Result<(), SupplierError>;

    /// Delete a product.
    async fn delete_product(&self, id: i64) -> Result<(), SupplierError>;
}

/// In-process supplier catalog for development and tests.
#[derive(Debug)]
pub struct FakeSupplierCatalog {
    products: RwLock<Vec<ProductDto>>,
}

impl FakeSupplierCatalog {
    /// Create a catalog with the three stock fake products.
    #[must_use]
    pub fn new() -> Self {
        let products = ["Fake product A", "Fake product B", "Fake product C"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| ProductDto {
                id,
                name: name.to_string(),
                ..ProductDto::default()
            })
            .collect();
        Self::with_products(products)
    }

    /// Create a catalog holding exactly `products`.
    #[must_use]
    pub const fn with_products(products: Vec<ProductDto>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

impl Default for FakeSupplierCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SupplierCatalogPort for FakeSupplierCatalog {
    async fn get_products(&self) -> Result<Vec<ProductDto>, SupplierError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Ok(products.clone())
    }

    async fn get_product_by_id(&self, id: i64) -> Result<Option<ProductDto>, SupplierError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn add_product(&self, mut product: ProductDto) -> Result<ProductDto, SupplierError> {
        let mut products = self.products.write().unwrap_or_else(PoisonError::into_inner);
        product.id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: &ProductDto) -> Result<(), SupplierError> {
        let mut products = self.products.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            *existing = product.clone();
        }
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<(), SupplierError> {
        let mut products = self.products.write().unwrap_or_else(PoisonError::into_inner);
        products.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_serves_three_products() {
        let catalog = FakeSupplierCatalog::new();
        let products = catalog.get_products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Fake product A");
        assert_eq!(products[2].id, 3);
    }

    #[tokio::test]
    async fn fake_get_missing_is_none() {
        let catalog = FakeSupplierCatalog::new();
        assert!(catalog.get_product_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fake_add_assigns_next_id() {
        let catalog = FakeSupplierCatalog::new();
        let added = catalog
            .add_product(ProductDto {
                id: 0,
                name: "Fake product D".to_string(),
                ..ProductDto::default()
            })
            .await
            .unwrap();

        assert_eq!(added.id, 4);
        assert_eq!(catalog.get_products().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn fake_add_to_empty_starts_at_one() {
        let catalog = FakeSupplierCatalog::with_products(vec![]);
        let added = catalog.add_product(ProductDto::default()).await.unwrap();
        assert_eq!(added.id, 1);
    }

    #[tokio::test]
    async fn fake_update_and_delete() {
        let catalog = FakeSupplierCatalog::new();
        let mut product = catalog.get_product_by_id(2).await.unwrap().unwrap();
        product.price = 9.99;
        catalog.update_product(&product).await.unwrap();
        assert_eq!(
            catalog.get_product_by_id(2).await.unwrap().unwrap().price,
            9.99
        );

        catalog.delete_product(2).await.unwrap();
        catalog.delete_product(2).await.unwrap();
        assert!(catalog.get_product_by_id(2).await.unwrap().is_none());
        assert_eq!(catalog.get_products().await.unwrap().len(), 2);
    }
}
