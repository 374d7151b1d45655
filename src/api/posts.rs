//! Post endpoints: likes and deletion.

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::server::AppState;
use crate::store::{observe, LikeToggle};

use super::extract::{require, JsonBody, PathParam, QueryParams};
use super::models::{LikeStatusResponse, SuccessResponse, UserIdParams};

const USER_ID_REQUIRED: &str = "User ID is required";

/// GET /api/posts/{id}/check-like?userId= - Whether the user likes the post
#[tracing::instrument(name = "http.check_like", skip(state, params))]
pub async fn check_like(
    State(state): State<AppState>,
    PathParam(post_id): PathParam<Uuid>,
    QueryParams(params): QueryParams<UserIdParams>,
) -> Result<Json<LikeStatusResponse>> {
    let user_id = require(params.user_id, USER_ID_REQUIRED)?;

    let is_liked = observe("check_post_like", state.store.check_post_like(post_id, user_id))
        .await
        .map_err(|e| ApiError::operation(e, "Failed to check like status"))?;

    Ok(Json(LikeStatusResponse { is_liked }))
}

/// POST /api/posts/{id}/like - Toggle the user's like on a post
#[tracing::instrument(name = "http.toggle_like", skip(state, request))]
pub async fn toggle_like(
    State(state): State<AppState>,
    PathParam(post_id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UserIdParams>,
) -> Result<Json<LikeToggle>> {
    let user_id = require(request.user_id, USER_ID_REQUIRED)?;

    let result = observe("toggle_post_like", state.store.toggle_post_like(post_id, user_id))
        .await
        .map_err(|e| ApiError::operation(e, "Failed to toggle like"))?;

    Ok(Json(result))
}

/// DELETE /api/posts/{id} - Delete a post owned by the user
#[tracing::instrument(name = "http.delete_post", skip(state, request))]
pub async fn delete_post(
    State(state): State<AppState>,
    PathParam(post_id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UserIdParams>,
) -> Result<Json<SuccessResponse>> {
    let user_id = require(request.user_id, USER_ID_REQUIRED)?;

    observe("delete_post", state.store.delete_post(post_id, user_id))
        .await
        .map_err(|e| ApiError::operation(e, "Failed to delete post"))?;

    tracing::info!(post_id = %post_id, user_id = %user_id, "Post deleted");
    Ok(Json(SuccessResponse::ok()))
}
