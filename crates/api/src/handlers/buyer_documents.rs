//! Handlers for the buyer-only `buyer_documents` resource.
//!
//! Unlike the general table, reads and deletes here are always scoped to a
//! buyer: `buyer_id` is a hard requirement, never an optional filter.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use deedstore_core::error::CoreError;
use deedstore_core::upload::validate_buyer_document_upload;
use deedstore_db::models::document::BuyerDocumentFilter;
use deedstore_db::repositories::BuyerDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::collect_multipart;
use crate::response::{BuyerDocumentResponse, MessageResponse, QueryResponse, UploadResponse};
use crate::state::AppState;

/// Reject absent or empty required query parameters with a specific reason.
fn require_param<'a>(value: Option<&'a String>, reason: &str) -> AppResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.as_str()),
        _ => Err(AppError::Core(CoreError::Validation(reason.to_string()))),
    }
}

/// POST /documents/buyer
///
/// Accepts a multipart form with a required `file` field plus `buyer_id`
/// and `document_tag`.
pub async fn upload_buyer_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let (file, fields) = collect_multipart(&mut multipart).await?;
    let upload = validate_buyer_document_upload(file, &fields)?;

    let doc = BuyerDocumentRepo::create(&state.pool, &upload).await?;

    tracing::info!(
        document_id = doc.document_id,
        buyer_id = %doc.buyer_id,
        document_tag = %doc.document_tag,
        "Buyer document uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Document added successfully",
            document_id: doc.document_id,
        }),
    ))
}

/// GET /documents/query/buyer
///
/// `buyer_id` is required; `document_tag` optionally narrows the result.
pub async fn query_buyer_documents(
    State(state): State<AppState>,
    Query(params): Query<BuyerDocumentFilter>,
) -> AppResult<Json<QueryResponse<BuyerDocumentResponse>>> {
    let buyer_id = require_param(params.buyer_id.as_ref(), "buyer_id is required")?;

    let docs =
        BuyerDocumentRepo::query(&state.pool, buyer_id, params.document_tag.as_deref()).await?;

    let documents: Vec<BuyerDocumentResponse> = docs.into_iter().map(Into::into).collect();
    Ok(Json(QueryResponse::new(documents)))
}

/// DELETE /documents/buyer/delete
///
/// Removes every document matching `(buyer_id, document_tag)`. Idempotent:
/// matching nothing still succeeds.
pub async fn delete_buyer_documents(
    State(state): State<AppState>,
    Query(params): Query<BuyerDocumentFilter>,
) -> AppResult<Json<MessageResponse>> {
    let buyer_id = require_param(params.buyer_id.as_ref(), "buyer_id is required")?;
    let document_tag = require_param(params.document_tag.as_ref(), "document_tag is required")?;

    let removed =
        BuyerDocumentRepo::delete_by_buyer_and_tag(&state.pool, buyer_id, document_tag).await?;

    tracing::info!(buyer_id, document_tag, removed, "Buyer documents deleted");

    Ok(Json(MessageResponse {
        message: "Documents deleted successfully".to_string(),
    }))
}
