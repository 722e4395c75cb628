//! Product DTO

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{NewProduct, Product};
use crate::domain::shared::ProductId;

/// DTO representing a product on the wire.
///
/// Deserialisation also accepts PascalCase keys, which the supplier API emits.
/// Only the exact lower-case and PascalCase spellings are matched; other casings
/// such as `ID` are ignored. A payload that carries both spellings of one field
/// is rejected as a duplicate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    /// Product ID.
    #[serde(default, alias = "Id")]
    pub id: i64,
    /// Name.
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Price.
    #[serde(default, alias = "Price")]
    pub price: f64,
    /// Description.
    #[serde(default, alias = "Description")]
    pub description: String,
}

impl ProductDto {
    /// Drop the id and keep the fields a store needs to add a product.
    #[must_use]
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: ProductId::new(dto.id),
            name: dto.name,
            price: dto.price,
            description: dto.description,
        }
    }
}
