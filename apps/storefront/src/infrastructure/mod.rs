//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain and application layers:
//!
//! - `persistence/`: SQLite and in-memory product stores, in-memory order store
//! - `supplier/`: HTTP client for the UnderCutters supplier catalog
//! - `config/`: Dependency injection container

pub mod config;
pub mod persistence;
pub mod supplier;
