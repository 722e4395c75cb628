//! Infrastructure Configuration
//!
//! Dependency injection container and adapter selection.

mod container;

pub use container::{Container, ContainerBuilder, ContainerError};
