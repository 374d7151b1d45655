//! API layer - HTTP endpoint handlers organized by resource.
//!
//! Every handler validates its required fields, makes exactly one store call
//! and answers with a named JSON field or `{ "error": ... }`.

mod admin;
mod conversations;
mod documents;
mod extract;
mod health;
mod metrics;
pub mod models;
mod posts;
mod profiles;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use admin::verify_user;
pub use conversations::{get_conversation, mark_conversation_read, mark_message_read};
pub use documents::generate_nda;
pub use extract::{require, require_text, JsonBody, PathParam, QueryParams};
pub use health::health;
pub use metrics::prometheus_metrics;
pub use posts::{check_like, delete_post, toggle_like};
pub use profiles::create_brand_profile;
pub use routes::api_routes;
