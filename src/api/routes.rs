use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::AppState;

use super::admin::verify_user;
use super::conversations::{get_conversation, mark_conversation_read, mark_message_read};
use super::documents::generate_nda;
use super::health::health;
use super::metrics::prometheus_metrics;
use super::posts::{check_like, delete_post, toggle_like};
use super::profiles::create_brand_profile;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest(
            "/api",
            Router::new()
                // Admin
                .route("/admin/users/verify", post(verify_user))
                // Messaging
                .route("/conversations/{id}", get(get_conversation))
                .route("/conversations/{id}/read", put(mark_conversation_read))
                .route("/messages/{id}/read", put(mark_message_read))
                // Posts
                .route("/posts/{id}", delete(delete_post))
                .route("/posts/{id}/check-like", get(check_like))
                .route("/posts/{id}/like", post(toggle_like))
                // Profiles
                .route("/profiles/brand", post(create_brand_profile))
                // Documents
                .route("/documents/nda", post(generate_nda)),
        )
}
