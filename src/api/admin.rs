//! Admin endpoints.

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::server::AppState;
use crate::store::observe;

use super::extract::JsonBody;
use super::models::{UserResponse, VerifyUserRequest};

/// POST /api/admin/users/verify - Set a user's verified flag
#[tracing::instrument(
    name = "http.verify_user",
    skip(state, request),
    fields(user_id = ?request.user_id)
)]
pub async fn verify_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<VerifyUserRequest>,
) -> Result<Json<UserResponse>> {
    let (Some(user_id), Some(verified)) = (request.user_id, request.verified) else {
        return Err(ApiError::validation(
            "User ID and verified status are required",
        ));
    };

    let user = observe(
        "toggle_user_verification",
        state.store.toggle_user_verification(user_id, verified),
    )
    .await
    .map_err(|e| ApiError::operation(e, "Failed to update user verification"))?;

    tracing::info!(user_id = %user_id, verified, "User verification updated");
    Ok(Json(UserResponse { user }))
}
