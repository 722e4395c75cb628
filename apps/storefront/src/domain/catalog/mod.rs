//! Catalog Bounded Context
//!
//! Product records and the storage contract every product store satisfies.
//!
//! # Key Concepts
//!
//! - **Product**: identity, name, price, description
//! - **Update vs. upsert**: updating a missing product is a hard failure,
//!   deleting one is a silent no-op

pub mod errors;
pub mod product;
pub mod repository;

pub use errors::CatalogError;
pub use product::{NewProduct, Product};
pub use repository::ProductRepository;
