//! Backend trait for the platform data store.
//!
//! Each method is one unit of work against the remote database. Handlers call
//! exactly one of them per request.

use std::future::Future;
use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::metrics::StoreMetrics;

use super::models::{BrandProfile, Conversation, LikeToggle, NewBrandProfile, User};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed record does not exist
    #[error("{0}")]
    NotFound(String),

    /// The caller may not act on the record
    #[error("{0}")]
    Forbidden(String),

    /// The write collides with existing data
    #[error("{0}")]
    Conflict(String),

    /// PostgreSQL operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend is temporarily unavailable
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Message safe to show to clients, if any.
    ///
    /// Database and availability errors may carry connection details.
    pub fn public_message(&self) -> Option<String> {
        match self {
            StoreError::NotFound(msg) | StoreError::Forbidden(msg) | StoreError::Conflict(msg) => {
                Some(msg.clone())
            }
            StoreError::Database(_) | StoreError::Unavailable(_) => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data-access operations of the platform.
#[async_trait]
pub trait PlatformStore: Send + Sync {
    /// Backend type identifier
    fn backend_type(&self) -> &'static str;

    /// Set a user's verified flag and return the updated user.
    async fn toggle_user_verification(&self, user_id: Uuid, verified: bool) -> StoreResult<User>;

    /// Mark every message in the conversation not sent by `user_id` as read.
    ///
    /// Returns the number of messages that changed.
    async fn mark_conversation_read(&self, conversation_id: Uuid, user_id: Uuid)
        -> StoreResult<u64>;

    /// Fetch a conversation with its messages, as seen by `user_id`.
    async fn get_conversation_by_id(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Conversation>;

    /// Mark a single message as read.
    async fn mark_message_read(&self, message_id: Uuid) -> StoreResult<()>;

    /// Whether `user_id` currently likes the post.
    async fn check_post_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool>;

    /// Like the post if not liked yet, otherwise remove the like.
    async fn toggle_post_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<LikeToggle>;

    /// Delete a post owned by `user_id`, together with its likes.
    async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<()>;

    /// Create the brand profile for a user and mark the user as a brand.
    async fn create_brand_profile(
        &self,
        user_id: Uuid,
        profile: NewBrandProfile,
    ) -> StoreResult<BrandProfile>;
}

/// Await a store operation, recording its outcome and latency.
pub async fn observe<T, F>(operation: &'static str, fut: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    let started = Instant::now();
    let result = fut.await;
    let elapsed = started.elapsed();

    StoreMetrics::record(operation, result.is_ok(), elapsed);
    tracing::debug!(
        operation = operation,
        success = result.is_ok(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Store operation finished"
    );

    result
}
