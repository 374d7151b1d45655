//! Conversation and message endpoints.

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::server::AppState;
use crate::store::observe;

use super::extract::{require, JsonBody, PathParam, QueryParams};
use super::models::{ConversationResponse, SuccessResponse, UserIdParams};

const USER_ID_REQUIRED: &str = "User ID is required";

/// PUT /api/conversations/{id}/read - Mark a conversation's incoming messages as read
#[tracing::instrument(name = "http.mark_conversation_read", skip(state, request))]
pub async fn mark_conversation_read(
    State(state): State<AppState>,
    PathParam(conversation_id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UserIdParams>,
) -> Result<Json<SuccessResponse>> {
    let user_id = require(request.user_id, USER_ID_REQUIRED)?;

    let changed = observe(
        "mark_conversation_read",
        state.store.mark_conversation_read(conversation_id, user_id),
    )
    .await
    .map_err(|e| ApiError::operation(e, "Failed to mark conversation as read"))?;

    tracing::debug!(user_id = %user_id, changed, "Conversation marked as read");
    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/conversations/{id}?userId= - Fetch a conversation with its messages
#[tracing::instrument(name = "http.get_conversation", skip(state, params))]
pub async fn get_conversation(
    State(state): State<AppState>,
    PathParam(conversation_id): PathParam<Uuid>,
    QueryParams(params): QueryParams<UserIdParams>,
) -> Result<Json<ConversationResponse>> {
    let user_id = require(params.user_id, USER_ID_REQUIRED)?;

    let conversation = observe(
        "get_conversation_by_id",
        state.store.get_conversation_by_id(conversation_id, user_id),
    )
    .await
    .map_err(|e| ApiError::operation(e, "Failed to fetch conversation"))?;

    Ok(Json(ConversationResponse { conversation }))
}

/// PUT /api/messages/{id}/read - Mark a single message as read
#[tracing::instrument(name = "http.mark_message_read", skip(state))]
pub async fn mark_message_read(
    State(state): State<AppState>,
    PathParam(message_id): PathParam<Uuid>,
) -> Result<Json<SuccessResponse>> {
    observe("mark_message_read", state.store.mark_message_read(message_id))
        .await
        .map_err(|e| ApiError::operation(e, "Failed to mark message as read"))?;

    Ok(Json(SuccessResponse::ok()))
}
