//! Request and response bodies shared by the endpoints.
//!
//! Request fields are optional so that a missing field is reported with the
//! endpoint's own message rather than a deserializer error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{BrandProfile, Conversation, User};

/// Body or query carrying only the acting user.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdParams {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyUserRequest {
    pub user_id: Option<Uuid>,
    pub verified: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandProfileRequest {
    pub user_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNdaRequest {
    pub brand_name: Option<String>,
    pub creator_name: Option<String>,
    pub term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub conversation: Conversation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    pub is_liked: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: BrandProfile,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: String,
}
