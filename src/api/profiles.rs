//! Profile creation endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, Result};
use crate::server::AppState;
use crate::store::{observe, NewBrandProfile};

use super::extract::JsonBody;
use super::models::{CreateBrandProfileRequest, ProfileResponse};

/// POST /api/profiles/brand - Create the brand profile for a user
#[tracing::instrument(
    name = "http.create_brand_profile",
    skip(state, request),
    fields(user_id = ?request.user_id)
)]
pub async fn create_brand_profile(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateBrandProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    let CreateBrandProfileRequest {
        user_id,
        company_name,
        industry,
        website,
        description,
        logo_url,
        location,
    } = request;

    let (Some(user_id), Some(company_name)) =
        (user_id, company_name.filter(|name| !name.trim().is_empty()))
    else {
        return Err(ApiError::validation(
            "User ID and company name are required",
        ));
    };

    let profile = NewBrandProfile {
        company_name,
        industry,
        website,
        description,
        logo_url,
        location,
    };

    let profile = observe(
        "create_brand_profile",
        state.store.create_brand_profile(user_id, profile),
    )
    .await
    .map_err(|e| ApiError::operation(e, "Failed to create brand profile"))?;

    Ok((StatusCode::CREATED, Json(ProfileResponse { profile })))
}
