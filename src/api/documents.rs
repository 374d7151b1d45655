//! Document generation endpoints.

use axum::Json;

use crate::document::{self, NdaInput};
use crate::error::Result;
use crate::metrics::DocumentMetrics;

use super::extract::{require_text, JsonBody};
use super::models::{DocumentResponse, GenerateNdaRequest};

const NDA_FIELDS_REQUIRED: &str = "Brand name, creator name, and term are required";

/// POST /api/documents/nda - Render the NDA for a brand and a creator
#[tracing::instrument(name = "http.generate_nda", skip(request))]
pub async fn generate_nda(
    JsonBody(request): JsonBody<GenerateNdaRequest>,
) -> Result<Json<DocumentResponse>> {
    let input = NdaInput {
        brand_name: require_text(request.brand_name, NDA_FIELDS_REQUIRED)?,
        creator_name: require_text(request.creator_name, NDA_FIELDS_REQUIRED)?,
        term: require_text(request.term, NDA_FIELDS_REQUIRED)?,
    };

    let document = document::generate(&input);
    DocumentMetrics::record_generated();

    Ok(Json(DocumentResponse { document }))
}
