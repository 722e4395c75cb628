//! Product entity.

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use crate::domain::shared::ProductId;

/// Check that `price` is a number every product store can hold.
///
/// Negative prices pass; NaN and infinities do not, since SQLite stores NaN
/// as `NULL`.
pub(crate) fn ensure_storable_price(price: f64) -> Result<(), CatalogError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::Storage(format!(
            "price must be a finite number, got {price}"
        )))
    }
}

/// A product record as held by a product store.
///
/// Name and description may be empty. Price has no range check but must be
/// finite to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identity.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Free-form description.
    pub description: String,
}

impl Product {
    /// Create a product with a known id.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    /// Overwrite the mutable fields with those of `other`, keeping this id.
    pub fn replace_details(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
        self.price = other.price;
        self.description.clone_from(&other.description);
    }
}

/// Payload for adding a product; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Free-form description.
    pub description: String,
}

impl NewProduct {
    /// Create a new product payload.
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    /// Attach the id the store assigned.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}
