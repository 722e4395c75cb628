//! Catalog errors.

use thiserror::Error;

use crate::domain::shared::ProductId;

/// Errors raised by product stores.
///
/// A missing product on read or delete is not an error; see
/// [`ProductRepository`](super::ProductRepository).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// `update_product` targeted an id that is not in the store.
    #[error("Cannot update product {product_id}: not found")]
    UpdateOnMissingProduct {
        /// Product ID.
        product_id: ProductId,
    },

    /// The backing store rejected the operation.
    #[error("Product store error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// True for the update-on-missing fault.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UpdateOnMissingProduct { .. })
    }
}
