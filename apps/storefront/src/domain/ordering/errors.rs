//! Ordering errors.

use thiserror::Error;

/// Errors raised by order stores.
///
/// Missing orders and missing line items are reported as `Ok(false)` or
/// `Ok(None)` by [`OrderRepository`](super::OrderRepository), never as errors.
/// The in-memory store never returns this type; it exists for stores that can
/// fail underneath.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The backing store rejected the operation.
    #[error("Order store error: {0}")]
    Storage(String),
}
