//! Shared Kernel
//!
//! Value objects used by both the catalog and ordering contexts.

pub mod value_objects;

pub use value_objects::{OrderId, ProductId, Timestamp};
