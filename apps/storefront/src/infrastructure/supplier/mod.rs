//! Supplier Adapters
//!
//! HTTP implementation of `SupplierCatalogPort`. The in-process fake lives
//! next to the port in the application layer.

mod undercutters;

pub use undercutters::UnderCuttersClient;
