//! In-memory platform store using DashMap.
//!
//! Data lives only as long as the process. Used for local development and
//! for driving the HTTP layer in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::backend::{PlatformStore, StoreError, StoreResult};
use super::models::{
    BrandProfile, Conversation, ConversationRecord, LikeToggle, Message, NewBrandProfile, Post,
    User,
};

/// In-memory platform store.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    conversations: DashMap<Uuid, ConversationRecord>,
    messages: DashMap<Uuid, Message>,
    posts: DashMap<Uuid, Post>,
    /// (post_id, user_id) -> liked at
    likes: DashMap<(Uuid, Uuid), DateTime<Utc>>,
    /// Keyed by owning user
    brand_profiles: DashMap<Uuid, BrandProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) -> Uuid {
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    pub fn insert_conversation(&self, conversation: ConversationRecord) -> Uuid {
        let id = conversation.id;
        self.conversations.insert(id, conversation);
        id
    }

    pub fn insert_message(&self, message: Message) -> Uuid {
        let id = message.id;
        self.messages.insert(id, message);
        id
    }

    pub fn insert_post(&self, post: Post) -> Uuid {
        let id = post.id;
        self.posts.insert(id, post);
        id
    }

    pub fn user(&self, user_id: Uuid) -> Option<User> {
        self.users.get(&user_id).map(|u| u.clone())
    }

    pub fn message(&self, message_id: Uuid) -> Option<Message> {
        self.messages.get(&message_id).map(|m| m.clone())
    }

    pub fn post(&self, post_id: Uuid) -> Option<Post> {
        self.posts.get(&post_id).map(|p| p.clone())
    }

    pub fn brand_profile(&self, user_id: Uuid) -> Option<BrandProfile> {
        self.brand_profiles.get(&user_id).map(|p| p.clone())
    }

    fn participant_conversation(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<ConversationRecord> {
        let record = self
            .conversations
            .get(&conversation_id)
            .map(|c| c.clone())
            .ok_or_else(|| StoreError::NotFound("Conversation not found".to_string()))?;

        if !record.has_participant(user_id) {
            return Err(StoreError::Forbidden(
                "User is not a participant in this conversation".to_string(),
            ));
        }

        Ok(record)
    }
}

#[async_trait]
impl PlatformStore for MemoryStore {
    fn backend_type(&self) -> &'static str {
        "memory"
    }

    async fn toggle_user_verification(&self, user_id: Uuid, verified: bool) -> StoreResult<User> {
        let mut user = self
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("User not found".to_string()))?;

        user.is_verified = verified;
        user.updated_at = Utc::now();

        tracing::debug!(user_id = %user_id, verified, "User verification updated");
        Ok(user.clone())
    }

    async fn mark_conversation_read(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<u64> {
        self.participant_conversation(conversation_id, user_id)?;

        let mut changed = 0;
        for mut message in self.messages.iter_mut() {
            if message.conversation_id == conversation_id
                && message.sender_id != user_id
                && !message.is_read
            {
                message.is_read = true;
                changed += 1;
            }
        }

        Ok(changed)
    }

    async fn get_conversation_by_id(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Conversation> {
        let record = self.participant_conversation(conversation_id, user_id)?;

        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .map(|m| m.value().clone())
            .collect();
        messages.sort_by_key(|m| m.created_at);

        Ok(Conversation::for_viewer(record, messages, user_id))
    }

    async fn mark_message_read(&self, message_id: Uuid) -> StoreResult<()> {
        let mut message = self
            .messages
            .get_mut(&message_id)
            .ok_or_else(|| StoreError::NotFound("Message not found".to_string()))?;

        message.is_read = true;
        Ok(())
    }

    async fn check_post_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool> {
        Ok(self.likes.contains_key(&(post_id, user_id)))
    }

    async fn toggle_post_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<LikeToggle> {
        // The post entry lock serializes toggles on the same post
        let mut post = self
            .posts
            .get_mut(&post_id)
            .ok_or_else(|| StoreError::NotFound("Post not found".to_string()))?;

        if !self.users.contains_key(&user_id) {
            return Err(StoreError::NotFound("User not found".to_string()));
        }

        let liked = match self.likes.entry((post_id, user_id)) {
            Entry::Occupied(entry) => {
                entry.remove();
                post.likes_count = (post.likes_count - 1).max(0);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(Utc::now());
                post.likes_count += 1;
                true
            }
        };

        Ok(LikeToggle {
            liked,
            likes_count: post.likes_count,
        })
    }

    async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        let removed = self
            .posts
            .remove_if(&post_id, |_, post| post.author_id == user_id);

        if removed.is_none() {
            return Err(if self.posts.contains_key(&post_id) {
                StoreError::Forbidden("Not authorized to delete this post".to_string())
            } else {
                StoreError::NotFound("Post not found".to_string())
            });
        }

        self.likes.retain(|(liked_post, _), _| *liked_post != post_id);
        Ok(())
    }

    async fn create_brand_profile(
        &self,
        user_id: Uuid,
        profile: NewBrandProfile,
    ) -> StoreResult<BrandProfile> {
        let mut user = self
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("User not found".to_string()))?;

        let created = match self.brand_profiles.entry(user_id) {
            Entry::Occupied(_) => {
                return Err(StoreError::Conflict(
                    "Brand profile already exists for this user".to_string(),
                ))
            }
            Entry::Vacant(entry) => entry.insert(profile.into_profile(user_id)).clone(),
        };

        user.role = "brand".to_string();
        user.updated_at = Utc::now();

        Ok(created)
    }
}
