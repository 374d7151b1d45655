//! Records read from and written to the platform store.
//!
//! JSON field names are camelCase, matching what the web client expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// "brand", "creator" or "admin"
    pub role: String,
    pub is_verified: bool,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            full_name: None,
            role: role.into(),
            is_verified: false,
            updated_at: Utc::now(),
        }
    }
}

/// Conversation row without its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub id: Uuid,
    pub brand_user_id: Uuid,
    pub creator_user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConversationRecord {
    pub fn new(brand_user_id: Uuid, creator_user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            brand_user_id,
            creator_user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.brand_user_id == user_id || self.creator_user_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(conversation_id: Uuid, sender_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation_id,
            sender_id,
            content: content.into(),
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

/// A conversation as seen by one participant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    pub brand_user_id: Uuid,
    pub creator_user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Oldest first
    pub messages: Vec<Message>,
    /// Unread messages sent by the other participant
    pub unread_count: usize,
}

impl Conversation {
    pub fn for_viewer(record: ConversationRecord, messages: Vec<Message>, viewer: Uuid) -> Self {
        let unread_count = messages
            .iter()
            .filter(|m| !m.is_read && m.sender_id != viewer)
            .count();

        Self {
            id: record.id,
            brand_user_id: record.brand_user_id,
            creator_user_id: record.creator_user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            messages,
            unread_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub likes_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            content: content.into(),
            image_url: None,
            likes_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// Outcome of toggling a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggle {
    /// Whether the user likes the post after the toggle
    pub liked: bool,
    pub likes_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile fields accepted when a brand profile is created.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrandProfile {
    pub company_name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub location: Option<String>,
}

impl NewBrandProfile {
    pub fn into_profile(self, user_id: Uuid) -> BrandProfile {
        BrandProfile {
            id: Uuid::new_v4(),
            user_id,
            company_name: self.company_name,
            industry: self.industry,
            website: self.website,
            description: self.description,
            logo_url: self.logo_url,
            location: self.location,
            created_at: Utc::now(),
        }
    }
}
