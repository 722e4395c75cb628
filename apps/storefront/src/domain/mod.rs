//! Domain Layer
//!
//! The innermost layer containing business rules with no infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities**: `Product` and the `Order` aggregate
//! - **Value Objects**: Identifiers and timestamps, equality by value
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Product records and their store
//! - [`ordering`]: Orders and the product snapshots they own

pub mod catalog;
pub mod ordering;
pub mod shared;
