// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_collect
    )
)]

//! Storefront - Rust Core Library
//!
//! Products catalog and orders repositories for the storefront services.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Entities, identifiers and repository traits
//!   - `catalog`: Product entity and the `ProductRepository` contract
//!   - `ordering`: Order aggregate, status, and the `OrderRepository` contract
//!
//! - **Application**: Ports and transfer shapes
//!   - `ports`: `SupplierCatalogPort` for the third-party catalog
//!   - `dto`: `ProductDto` used on the supplier wire
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: SQLite and in-memory product stores, in-memory order store
//!   - `supplier`: UnderCutters HTTP client
//!   - `config`: Dependency injection container
//!
//! The product store is chosen once at startup by [`Container::from_config`];
//! nothing below the container looks at configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Entities and repository traits.
pub mod domain;

/// Application layer - Ports and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::catalog::{CatalogError, NewProduct, Product, ProductRepository};
pub use domain::ordering::{Order, OrderError, OrderRepository, OrderStatus};
pub use domain::shared::{OrderId, ProductId, Timestamp};

// Application re-exports
pub use application::dto::ProductDto;
pub use application::ports::{FakeSupplierCatalog, SupplierCatalogPort, SupplierError};

// Infrastructure re-exports
pub use infrastructure::config::{Container, ContainerBuilder, ContainerError};
pub use infrastructure::persistence::{
    InMemoryOrderRepository, InMemoryProductRepository, SqliteProductRepository,
};
pub use infrastructure::supplier::UnderCuttersClient;
