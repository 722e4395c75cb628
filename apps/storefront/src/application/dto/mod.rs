//! Data Transfer Objects (DTOs)
//!
//! DTOs are used at API boundaries, including the supplier wire format.

mod product_dto;

pub use product_dto::ProductDto;
