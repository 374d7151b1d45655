//! Data-access layer for the collaboration platform.
//!
//! Every operation is one read or write against the data store and returns a
//! typed `StoreResult`. Backends:
//!
//! - `PostgresStore`: the remote database via the service-role pool
//! - `MemoryStore`: DashMap-backed, for development and tests
//!
//! Use `create_store()` to pick one from configuration.

pub mod backend;
mod factory;
pub mod memory_backend;
pub mod models;
pub mod postgres_backend;

pub use backend::{observe, PlatformStore, StoreError, StoreResult};
pub use factory::create_store;
pub use memory_backend::MemoryStore;
pub use models::{
    BrandProfile, Conversation, ConversationRecord, LikeToggle, Message, NewBrandProfile, Post,
    User,
};
pub use postgres_backend::PostgresStore;
