//! PostgreSQL platform store.
//!
//! Runs with the service-role connection, so row-level policies do not apply;
//! ownership checks are done in the queries. Table layout is in
//! `migrations/001_initial_schema.sql`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::backend::{PlatformStore, StoreError, StoreResult};
use super::models::{
    BrandProfile, Conversation, ConversationRecord, LikeToggle, Message, NewBrandProfile, User,
};

/// PostgreSQL platform store.
pub struct PostgresStore {
    /// PostgreSQL connection pool
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn participant_conversation(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<ConversationRecord> {
        let record: Option<ConversationRecord> = sqlx::query_as(
            r#"
            SELECT id, brand_user_id, creator_user_id, created_at, updated_at
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(conversation_id)
        .fetch_optional(&self.pool)
        .await?;

        let record =
            record.ok_or_else(|| StoreError::NotFound("Conversation not found".to_string()))?;

        if !record.has_participant(user_id) {
            return Err(StoreError::Forbidden(
                "User is not a participant in this conversation".to_string(),
            ));
        }

        Ok(record)
    }
}

/// Map constraint violations on insert to domain errors.
fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict("Brand profile already exists for this user".to_string());
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::NotFound("User not found".to_string());
        }
    }
    StoreError::Database(err)
}

fn classify_like_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return StoreError::NotFound("User not found".to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl PlatformStore for PostgresStore {
    fn backend_type(&self) -> &'static str {
        "postgres"
    }

    async fn toggle_user_verification(&self, user_id: Uuid, verified: bool) -> StoreResult<User> {
        let user: Option<User> = sqlx::query_as(
            r#"
            UPDATE users
            SET is_verified = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, full_name, role, is_verified, updated_at
            "#,
        )
        .bind(user_id)
        .bind(verified)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| StoreError::NotFound("User not found".to_string()))
    }

    async fn mark_conversation_read(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<u64> {
        self.participant_conversation(conversation_id, user_id)
            .await?;

        let result = sqlx::query(
            r#"
            UPDATE messages
            SET is_read = TRUE
            WHERE conversation_id = $1 AND sender_id <> $2 AND is_read = FALSE
            "#,
        )
        .bind(conversation_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn get_conversation_by_id(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Conversation> {
        let record = self
            .participant_conversation(conversation_id, user_id)
            .await?;

        let messages: Vec<Message> = sqlx::query_as(
            r#"
            SELECT id, conversation_id, sender_id, content, is_read, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Conversation::for_viewer(record, messages, user_id))
    }

    async fn mark_message_read(&self, message_id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("UPDATE messages SET is_read = TRUE WHERE id = $1")
            .bind(message_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Message not found".to_string()));
        }
        Ok(())
    }

    async fn check_post_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool> {
        let (liked,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(liked)
    }

    async fn toggle_post_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<LikeToggle> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent toggles on the same post
        let post: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;
        if post.is_none() {
            return Err(StoreError::NotFound("Post not found".to_string()));
        }

        let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let liked = removed == 0;
        if liked {
            sqlx::query("INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2)")
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(classify_like_error)?;
        }

        let (likes_count,): (i32,) = sqlx::query_as(
            r#"
            UPDATE posts
            SET likes_count = (SELECT COUNT(*) FROM post_likes WHERE post_id = $1)
            WHERE id = $1
            RETURNING likes_count
            "#,
        )
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(post_id = %post_id, user_id = %user_id, liked, likes_count, "Post like toggled");
        Ok(LikeToggle { liked, likes_count })
    }

    async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        // post_likes rows go with the post (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;

        Err(if exists {
            StoreError::Forbidden("Not authorized to delete this post".to_string())
        } else {
            StoreError::NotFound("Post not found".to_string())
        })
    }

    async fn create_brand_profile(
        &self,
        user_id: Uuid,
        profile: NewBrandProfile,
    ) -> StoreResult<BrandProfile> {
        let mut tx = self.pool.begin().await?;

        let created: BrandProfile = sqlx::query_as(
            r#"
            INSERT INTO brand_profiles
                (user_id, company_name, industry, website, description, logo_url, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, company_name, industry, website, description, logo_url,
                      location, created_at
            "#,
        )
        .bind(user_id)
        .bind(&profile.company_name)
        .bind(&profile.industry)
        .bind(&profile.website)
        .bind(&profile.description)
        .bind(&profile.logo_url)
        .bind(&profile.location)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify_insert_error)?;

        sqlx::query("UPDATE users SET role = 'brand', updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(user_id = %user_id, profile_id = %created.id, "Brand profile created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = classify_insert_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_like_errors_pass_through() {
        let err = classify_like_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Database(sqlx::Error::PoolTimedOut)));
    }
}
