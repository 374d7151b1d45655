//! HTTP-level integration tests
//!
//! These tests drive the full router (extractors, handlers, error mapping)
//! against the in-memory store and a store double that always fails.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use creator_collab_api::config::Settings;
use creator_collab_api::document::format_long_date;
use creator_collab_api::server::{create_app, AppState};
use creator_collab_api::store::{
    BrandProfile, Conversation, ConversationRecord, LikeToggle, MemoryStore, Message,
    NewBrandProfile, PlatformStore, Post, StoreError, StoreResult, User,
};

// =============================================================================
// Helpers
// =============================================================================

fn app_with(store: Arc<dyn PlatformStore>) -> axum::Router {
    create_app(AppState::new(Settings::default(), store))
}

async fn send(app: axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Send a raw body with no `Content-Type` header.
async fn send_raw(app: axum::Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Store double whose every operation fails with the configured error.
struct FailingStore {
    error: fn() -> StoreError,
}

impl FailingStore {
    fn new(error: fn() -> StoreError) -> Arc<dyn PlatformStore> {
        Arc::new(Self { error })
    }
}

#[async_trait]
impl PlatformStore for FailingStore {
    fn backend_type(&self) -> &'static str {
        "failing"
    }

    async fn toggle_user_verification(&self, _: Uuid, _: bool) -> StoreResult<User> {
        Err((self.error)())
    }

    async fn mark_conversation_read(&self, _: Uuid, _: Uuid) -> StoreResult<u64> {
        Err((self.error)())
    }

    async fn get_conversation_by_id(&self, _: Uuid, _: Uuid) -> StoreResult<Conversation> {
        Err((self.error)())
    }

    async fn mark_message_read(&self, _: Uuid) -> StoreResult<()> {
        Err((self.error)())
    }

    async fn check_post_like(&self, _: Uuid, _: Uuid) -> StoreResult<bool> {
        Err((self.error)())
    }

    async fn toggle_post_like(&self, _: Uuid, _: Uuid) -> StoreResult<LikeToggle> {
        Err((self.error)())
    }

    async fn delete_post(&self, _: Uuid, _: Uuid) -> StoreResult<()> {
        Err((self.error)())
    }

    async fn create_brand_profile(&self, _: Uuid, _: NewBrandProfile) -> StoreResult<BrandProfile> {
        Err((self.error)())
    }
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused (db.internal:5432)".to_string())
}

fn not_found() -> StoreError {
    StoreError::NotFound("Conversation not found".to_string())
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_store() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = send(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Admin verification
// =============================================================================

mod admin_tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_user() {
        let store = Arc::new(MemoryStore::new());
        let user_id = store.insert_user(User::new("creator@example.com", "creator"));
        let app = app_with(store.clone());

        let (status, body) = send(
            app,
            Method::POST,
            "/api/admin/users/verify",
            Some(json!({"userId": user_id, "verified": true})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], user_id.to_string());
        assert_eq!(body["user"]["isVerified"], true);
        assert!(store.user(user_id).unwrap().is_verified);
    }

    #[tokio::test]
    async fn test_verify_requires_both_fields() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/admin/users/verify",
            Some(json!({"userId": Uuid::new_v4()})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID and verified status are required");
    }

    #[tokio::test]
    async fn test_verify_rejects_wrong_type() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/admin/users/verify",
            Some(json!({"userId": Uuid::new_v4(), "verified": "yes"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_verify_unknown_user_is_operation_error() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/admin/users/verify",
            Some(json!({"userId": Uuid::new_v4(), "verified": false})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "User not found");
    }
}

// =============================================================================
// Conversations & messages
// =============================================================================

mod conversation_tests {
    use super::*;

    fn seeded() -> (Arc<MemoryStore>, Uuid, Uuid, Uuid, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let brand = store.insert_user(User::new("brand@example.com", "brand"));
        let creator = store.insert_user(User::new("creator@example.com", "creator"));
        let conversation = store.insert_conversation(ConversationRecord::new(brand, creator));
        let message = store.insert_message(Message::new(conversation, brand, "Interested in a collab?"));
        (store, conversation, brand, creator, message)
    }

    #[tokio::test]
    async fn test_get_conversation() {
        let (store, conversation, _, creator, _) = seeded();
        let app = app_with(store);

        let uri = format!("/api/conversations/{}?userId={}", conversation, creator);
        let (status, body) = send(app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["conversation"]["id"], conversation.to_string());
        assert_eq!(body["conversation"]["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["conversation"]["unreadCount"], 1);
    }

    #[tokio::test]
    async fn test_get_conversation_requires_user_id() {
        let (store, conversation, _, _, _) = seeded();
        let app = app_with(store);

        let uri = format!("/api/conversations/{}", conversation);
        let (status, body) = send(app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID is required");
    }

    #[tokio::test]
    async fn test_get_conversation_malformed_id() {
        let (store, _, _, creator, _) = seeded();
        let app = app_with(store);

        let uri = format!("/api/conversations/not-a-uuid?userId={}", creator);
        let (status, body) = send(app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_mark_conversation_read() {
        let (store, conversation, _, creator, message) = seeded();
        let app = app_with(store.clone());

        let uri = format!("/api/conversations/{}/read", conversation);
        let (status, body) = send(app, Method::PUT, &uri, Some(json!({"userId": creator}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
        assert!(store.message(message).unwrap().is_read);
    }

    #[tokio::test]
    async fn test_mark_conversation_read_requires_user_id() {
        let (store, conversation, _, _, _) = seeded();
        let app = app_with(store);

        let uri = format!("/api/conversations/{}/read", conversation);
        let (status, body) = send(app, Method::PUT, &uri, Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID is required");
    }

    #[tokio::test]
    async fn test_mark_message_read() {
        let (store, _, _, _, message) = seeded();
        let app = app_with(store.clone());

        let uri = format!("/api/messages/{}/read", message);
        let (status, body) = send(app, Method::PUT, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
        assert!(store.message(message).unwrap().is_read);
    }

    #[tokio::test]
    async fn test_conversation_not_found_forwards_message() {
        let app = app_with(FailingStore::new(not_found));

        let uri = format!("/api/conversations/{}?userId={}", Uuid::new_v4(), Uuid::new_v4());
        let (status, body) = send(app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Conversation not found");
    }
}

// =============================================================================
// Posts
// =============================================================================

mod post_tests {
    use super::*;

    fn seeded() -> (Arc<MemoryStore>, Uuid, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let author = Uuid::new_v4();
        let post = store.insert_post(Post::new(author, "New drop this Friday"));
        (store, post, author)
    }

    #[tokio::test]
    async fn test_toggle_like_requires_user_id() {
        let (store, post, _) = seeded();
        let app = app_with(store);

        let uri = format!("/api/posts/{}/like", post);
        let (status, body) = send(app, Method::POST, &uri, Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "User ID is required"}));
    }

    #[tokio::test]
    async fn test_toggle_like_and_check() {
        let (store, post, _) = seeded();
        let fan = store.insert_user(User::new("fan@example.com", "brand"));

        let like_uri = format!("/api/posts/{}/like", post);
        let (status, body) = send(
            app_with(store.clone()),
            Method::POST,
            &like_uri,
            Some(json!({"userId": fan})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"liked": true, "likesCount": 1}));

        let check_uri = format!("/api/posts/{}/check-like?userId={}", post, fan);
        let (status, body) = send(app_with(store.clone()), Method::GET, &check_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"isLiked": true}));

        let (_, body) = send(
            app_with(store.clone()),
            Method::POST,
            &like_uri,
            Some(json!({"userId": fan})),
        )
        .await;
        assert_eq!(body, json!({"liked": false, "likesCount": 0}));
    }

    #[tokio::test]
    async fn test_check_like_requires_user_id() {
        let (store, post, _) = seeded();
        let uri = format!("/api/posts/{}/check-like", post);
        let (status, body) = send(app_with(store), Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID is required");
    }

    #[tokio::test]
    async fn test_delete_post() {
        let (store, post, author) = seeded();
        let uri = format!("/api/posts/{}", post);

        let (status, body) = send(
            app_with(store.clone()),
            Method::DELETE,
            &uri,
            Some(json!({"userId": Uuid::new_v4()})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Not authorized to delete this post");

        let (status, body) = send(
            app_with(store.clone()),
            Method::DELETE,
            &uri,
            Some(json!({"userId": author})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
        assert!(store.post(post).is_none());
    }

    #[tokio::test]
    async fn test_delete_post_without_body() {
        let (store, post, _) = seeded();
        let uri = format!("/api/posts/{}", post);
        let (status, body) = send(app_with(store.clone()), Method::DELETE, &uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "User ID is required"}));
        assert!(store.post(post).is_some());
    }

    #[tokio::test]
    async fn test_body_read_without_content_type() {
        let (store, post, author) = seeded();
        let fan = store.insert_user(User::new("fan@example.com", "brand"));

        let like_uri = format!("/api/posts/{}/like", post);
        let (status, body) = send_raw(
            app_with(store.clone()),
            Method::POST,
            &like_uri,
            &json!({"userId": fan}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"liked": true, "likesCount": 1}));

        let (status, body) = send_raw(app_with(store.clone()), Method::POST, &like_uri, "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "User ID is required"}));

        let delete_uri = format!("/api/posts/{}", post);
        let (status, body) = send_raw(
            app_with(store.clone()),
            Method::DELETE,
            &delete_uri,
            &json!({"userId": author}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (store, post, _) = seeded();
        let uri = format!("/api/posts/{}/like", post);
        let (status, body) = send_raw(app_with(store), Method::POST, &uri, "{\"userId\":").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_toggle_like_unknown_user() {
        let (store, post, _) = seeded();
        let uri = format!("/api/posts/{}/like", post);
        let (status, body) = send(
            app_with(store.clone()),
            Method::POST,
            &uri,
            Some(json!({"userId": Uuid::new_v4()})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "User not found"}));
        assert_eq!(store.post(post).unwrap().likes_count, 0);
    }

    #[tokio::test]
    async fn test_store_failure_uses_fallback() {
        let app = app_with(FailingStore::new(unavailable));
        let uri = format!("/api/posts/{}/like", Uuid::new_v4());
        let (status, body) = send(app, Method::POST, &uri, Some(json!({"userId": Uuid::new_v4()}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to toggle like"}));
    }
}

// =============================================================================
// Store failures
// =============================================================================

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_every_endpoint_hides_store_failure_behind_fallback() {
        let id = Uuid::new_v4();
        let user = Uuid::new_v4();

        let cases = vec![
            (
                Method::POST,
                "/api/admin/users/verify".to_string(),
                Some(json!({"userId": user, "verified": true})),
                "Failed to update user verification",
            ),
            (
                Method::PUT,
                format!("/api/conversations/{}/read", id),
                Some(json!({"userId": user})),
                "Failed to mark conversation as read",
            ),
            (
                Method::GET,
                format!("/api/conversations/{}?userId={}", id, user),
                None,
                "Failed to fetch conversation",
            ),
            (
                Method::PUT,
                format!("/api/messages/{}/read", id),
                None,
                "Failed to mark message as read",
            ),
            (
                Method::GET,
                format!("/api/posts/{}/check-like?userId={}", id, user),
                None,
                "Failed to check like status",
            ),
            (
                Method::POST,
                format!("/api/posts/{}/like", id),
                Some(json!({"userId": user})),
                "Failed to toggle like",
            ),
            (
                Method::DELETE,
                format!("/api/posts/{}", id),
                Some(json!({"userId": user})),
                "Failed to delete post",
            ),
            (
                Method::POST,
                "/api/profiles/brand".to_string(),
                Some(json!({"userId": user, "companyName": "Acme"})),
                "Failed to create brand profile",
            ),
        ];

        for (method, uri, body, fallback) in cases {
            let app = app_with(FailingStore::new(unavailable));
            let (status, response) = send(app, method.clone(), &uri, body).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
            assert_eq!(response, json!({"error": fallback}), "{} {}", method, uri);
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

mod profile_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_brand_profile() {
        let store = Arc::new(MemoryStore::new());
        let user_id = store.insert_user(User::new("hello@acme.test", "creator"));

        let (status, body) = send(
            app_with(store.clone()),
            Method::POST,
            "/api/profiles/brand",
            Some(json!({
                "userId": user_id,
                "companyName": "Acme Outdoors",
                "industry": "Outdoor gear",
                "website": "https://acme.test"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["profile"]["companyName"], "Acme Outdoors");
        assert_eq!(body["profile"]["userId"], user_id.to_string());
        assert_eq!(store.user(user_id).unwrap().role, "brand");

        let (status, body) = send(
            app_with(store),
            Method::POST,
            "/api/profiles/brand",
            Some(json!({"userId": user_id, "companyName": "Acme Again"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Brand profile already exists for this user");
    }

    #[tokio::test]
    async fn test_create_brand_profile_requires_fields() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/profiles/brand",
            Some(json!({"userId": Uuid::new_v4(), "companyName": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID and company name are required");
    }

    #[tokio::test]
    async fn test_create_brand_profile_store_failure() {
        let app = app_with(FailingStore::new(unavailable));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/profiles/brand",
            Some(json!({"userId": Uuid::new_v4(), "companyName": "Acme"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to create brand profile");
    }
}

// =============================================================================
// Documents
// =============================================================================

mod document_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_nda() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let today = format_long_date(Utc::now().date_naive());

        let (status, body) = send(
            app,
            Method::POST,
            "/api/documents/nda",
            Some(json!({
                "brandName": "Acme Outdoors",
                "creatorName": "Riley Park",
                "term": "6 months"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let document = body["document"].as_str().unwrap();
        assert!(document.contains("Acme Outdoors"));
        assert!(document.contains("Riley Park"));
        assert!(document.contains("6 months"));
        let after = format_long_date(Utc::now().date_naive());
        assert!(document.contains(&today) || document.contains(&after));
    }

    #[tokio::test]
    async fn test_generate_nda_requires_fields() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/api/documents/nda",
            Some(json!({"brandName": "Acme", "creatorName": "Riley"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Brand name, creator name, and term are required");
    }
}
