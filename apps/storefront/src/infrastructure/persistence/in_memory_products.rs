//! In-memory product repository.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::seed::catalog_seed;
use crate::domain::catalog::product::ensure_storable_price;
use crate::domain::catalog::{CatalogError, NewProduct, Product, ProductRepository};
use crate::domain::shared::ProductId;

#[derive(Debug, Default)]
struct Catalog {
    products: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory implementation of `ProductRepository`.
///
/// Used for development runs and tests. Contents are lost when the process
/// exits.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `products`.
    ///
    /// New ids continue after the highest id given.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<_, _> = products.into_iter().map(|p| (p.id, p)).collect();
        let last_id = products.keys().next_back().map_or(0, ProductId::value);
        Self {
            catalog: RwLock::new(Catalog { products, last_id }),
        }
    }

    /// Create a repository holding the 20-item development catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_products(catalog_seed())
    }

    /// Number of products held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .products
            .len()
    }

    /// True if no products are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Ok(catalog.products.values().cloned().collect())
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Ok(catalog.products.get(&id).cloned())
    }

    async fn add_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        ensure_storable_price(product.price)?;
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        catalog.last_id += 1;
        let product = product.with_id(ProductId::new(catalog.last_id));
        catalog.products.insert(product.id, product.clone());
        drop(catalog);

        tracing::debug!(product_id = %product.id, "Product added");
        Ok(product)
    }

    async fn update_product(&self, product: &Product) -> Result<(), CatalogError> {
        ensure_storable_price(product.price)?;
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        let Some(existing) = catalog.products.get_mut(&product.id) else {
            return Err(CatalogError::UpdateOnMissingProduct {
                product_id: product.id,
            });
        };
        existing.replace_details(product);
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        if catalog.products.remove(&id).is_some() {
            tracing::debug!(product_id = %id, "Product deleted");
        }
        Ok(())
    }
}
