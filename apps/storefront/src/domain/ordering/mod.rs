//! Ordering Bounded Context
//!
//! Orders and the product snapshots they own.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: id, date, status and an ordered list of line items
//! - **Line items**: copies of products taken when they were added; later catalog
//!   edits do not reach them
//! - **Identity**: order ids come from a monotonic counter and are never reused

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::Order;
pub use errors::OrderError;
pub use repository::OrderRepository;
pub use value_objects::OrderStatus;
