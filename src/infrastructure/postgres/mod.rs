//! PostgreSQL persistence module.
//!
//! Provides connection pooling for the service-role database client.

pub mod pool;

pub use pool::{PostgresPool, PostgresPoolError};
