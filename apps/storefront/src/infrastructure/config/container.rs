//! Dependency Injection Container
//!
//! Chooses and wires the product store, order store and supplier catalog.

use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::{FakeSupplierCatalog, SupplierCatalogPort, SupplierError};
use crate::config::{Config, ProductStoreBackend};
use crate::domain::catalog::{CatalogError, ProductRepository};
use crate::domain::ordering::OrderRepository;
use crate::infrastructure::persistence::seed::database_seed;
use crate::infrastructure::persistence::{
    InMemoryOrderRepository, InMemoryProductRepository, SqliteProductRepository,
};
use crate::infrastructure::supplier::UnderCuttersClient;

/// Errors raised while wiring the container.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The product store could not be opened or seeded.
    #[error("Product store setup failed: {0}")]
    ProductStore(#[from] CatalogError),

    /// The supplier client could not be built.
    #[error("Supplier client setup failed: {0}")]
    Supplier(#[from] SupplierError),
}

/// Dependency injection container.
///
/// Holds the wired adapters behind their traits. Use [`Container::from_config`]
/// at startup or [`Container::builder`] to assemble one by hand.
#[derive(Clone)]
pub struct Container {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    supplier: Arc<dyn SupplierCatalogPort>,
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container").finish_non_exhaustive()
    }
}

impl Container {
    /// Create a new container with all dependencies.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        supplier: Arc<dyn SupplierCatalogPort>,
    ) -> Self {
        Self {
            products,
            orders,
            supplier,
        }
    }

    /// Start a builder. Unset parts default to the in-memory adapters.
    #[must_use]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::default()
    }

    /// Wire adapters according to `config`.
    ///
    /// The SQLite store is seeded with the test products only if its table is
    /// empty. The in-memory store is seeded with the development catalog.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError` if the product store cannot be opened or
    /// seeded, or the supplier client cannot be built.
    pub async fn from_config(config: &Config) -> Result<Self, ContainerError> {
        let store = &config.product_store;
        let products: Arc<dyn ProductRepository> = match store.backend {
            ProductStoreBackend::Sqlite => {
                let repo = SqliteProductRepository::connect(store).await?;
                if store.seed {
                    repo.seed_if_empty(database_seed()).await?;
                }
                Arc::new(repo)
            }
            ProductStoreBackend::Memory if store.seed => {
                Arc::new(InMemoryProductRepository::seeded())
            }
            ProductStoreBackend::Memory => Arc::new(InMemoryProductRepository::new()),
        };

        let orders: Arc<dyn OrderRepository> = if config.orders.seed {
            Arc::new(InMemoryOrderRepository::seeded())
        } else {
            Arc::new(InMemoryOrderRepository::new())
        };

        let supplier: Arc<dyn SupplierCatalogPort> = if config.supplier.enabled {
            Arc::new(UnderCuttersClient::new(&config.supplier)?)
        } else {
            Arc::new(FakeSupplierCatalog::new())
        };

        tracing::info!(
            backend = ?store.backend,
            supplier_enabled = config.supplier.enabled,
            "Container wired"
        );

        Ok(Self::new(products, orders, supplier))
    }

    /// Get the product repository.
    #[must_use]
    pub fn products(&self) -> Arc<dyn ProductRepository> {
        Arc::clone(&self.products)
    }

    /// Get the order repository.
    #[must_use]
    pub fn orders(&self) -> Arc<dyn OrderRepository> {
        Arc::clone(&self.orders)
    }

    /// Get the supplier catalog port.
    #[must_use]
    pub fn supplier(&self) -> Arc<dyn SupplierCatalogPort> {
        Arc::clone(&self.supplier)
    }
}

/// Builder for [`Container`].
#[derive(Default)]
pub struct ContainerBuilder {
    products: Option<Arc<dyn ProductRepository>>,
    orders: Option<Arc<dyn OrderRepository>>,
    supplier: Option<Arc<dyn SupplierCatalogPort>>,
}

impl ContainerBuilder {
    /// Set the product repository.
    #[must_use]
    pub fn products(mut self, products: Arc<dyn ProductRepository>) -> Self {
        self.products = Some(products);
        self
    }

    /// Set the order repository.
    #[must_use]
    pub fn orders(mut self, orders: Arc<dyn OrderRepository>) -> Self {
        self.orders = Some(orders);
        self
    }

    /// Set the supplier catalog port.
    #[must_use]
    pub fn supplier(mut self, supplier: Arc<dyn SupplierCatalogPort>) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// Build the container, filling gaps with empty in-memory adapters and
    /// the fake supplier.
    #[must_use]
    pub fn build(self) -> Container {
        Container::new(
            self.products
                .unwrap_or_else(|| Arc::new(InMemoryProductRepository::new())),
            self.orders
                .unwrap_or_else(|| Arc::new(InMemoryOrderRepository::new())),
            self.supplier
                .unwrap_or_else(|| Arc::new(FakeSupplierCatalog::new())),
        )
    }
}
