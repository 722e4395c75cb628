//! Application Layer
//!
//! It defines:
//!
//! - **Ports**: Interfaces for external systems (the supplier catalog)
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod ports;

pub use dto::*;
pub use ports::*;
