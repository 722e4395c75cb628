//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems this application calls.

mod supplier_catalog_port;

pub use supplier_catalog_port::{FakeSupplierCatalog, SupplierCatalogPort, SupplierError};
