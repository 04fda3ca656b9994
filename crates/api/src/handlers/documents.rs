//! Handlers for the general `documents` resource.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use deedstore_core::upload::validate_document_upload;
use deedstore_db::models::document::DocumentFilter;
use deedstore_db::repositories::DocumentRepo;

use crate::error::AppResult;
use crate::handlers::collect_multipart;
use crate::response::{DocumentResponse, QueryResponse, UploadResponse};
use crate::state::AppState;

/// POST /documents
///
/// Accepts a multipart form with a required `file` field plus
/// `property_id`, `uploaded_by`, `document_tag`, and an id for whichever
/// side uploaded (`buyer_id` / `seller_id`).
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let (file, fields) = collect_multipart(&mut multipart).await?;
    let upload = validate_document_upload(file, &fields)?;

    let doc = DocumentRepo::create(&state.pool, &upload).await?;

    tracing::info!(
        document_id = doc.document_id,
        property_id = %doc.property_id,
        uploaded_by = %doc.uploaded_by,
        "Document uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Document added successfully",
            document_id: doc.document_id,
        }),
    ))
}

/// GET /documents/query
///
/// Filter documents by any subset of `uploaded_by`, `property_id`,
/// `buyer_id`, `seller_id`, `document_tag`. No filters returns the whole
/// table, newest upload first.
pub async fn query_documents(
    State(state): State<AppState>,
    Query(params): Query<DocumentFilter>,
) -> AppResult<Json<QueryResponse<DocumentResponse>>> {
    let docs = DocumentRepo::query(&state.pool, &params).await?;

    let documents: Vec<DocumentResponse> = docs.into_iter().map(Into::into).collect();
    Ok(Json(QueryResponse::new(documents)))
}
