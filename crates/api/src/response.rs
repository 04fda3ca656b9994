//! Wire representations for API responses.
//!
//! Row models from `deedstore_db` carry raw file bytes; the conversions
//! here encode those bytes into a `data:` URL and render timestamps as
//! ISO-8601 strings, so nothing binary ever reaches serde.

use deedstore_core::data_url::data_url;
use deedstore_core::types::DbId;
use deedstore_db::models::document::{BuyerDocument, Document};
use serde::Serialize;

/// `201 { message, document_id }` envelope for successful uploads.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub document_id: DbId,
}

/// `200 { count, documents }` envelope for query endpoints.
#[derive(Debug, Serialize)]
pub struct QueryResponse<T: Serialize> {
    pub count: usize,
    pub documents: Vec<T>,
}

impl<T: Serialize> QueryResponse<T> {
    pub fn new(documents: Vec<T>) -> Self {
        Self {
            count: documents.len(),
            documents,
        }
    }
}

/// `200 { message }` envelope for the delete endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A general document as it appears in query responses.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document_id: DbId,
    pub filename: String,
    pub file_type: String,
    pub datetime_uploaded: String,
    pub property_id: String,
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
    pub uploaded_by: String,
    pub document_tag: String,
    /// Inline `data:<type>;base64,<bytes>` locator; the raw payload is
    /// never exposed separately.
    pub image_url: String,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        let image_url = data_url(&doc.file_type, &doc.file_data);
        Self {
            document_id: doc.document_id,
            filename: doc.filename,
            file_type: doc.file_type,
            datetime_uploaded: doc.datetime_uploaded.to_rfc3339(),
            property_id: doc.property_id,
            buyer_id: doc.buyer_id,
            seller_id: doc.seller_id,
            uploaded_by: doc.uploaded_by,
            document_tag: doc.document_tag,
            image_url,
        }
    }
}

/// A buyer-only document as it appears in query responses.
#[derive(Debug, Serialize)]
pub struct BuyerDocumentResponse {
    pub document_id: DbId,
    pub filename: String,
    pub file_type: String,
    pub datetime_uploaded: String,
    pub buyer_id: String,
    pub document_tag: String,
    pub image_url: String,
}

impl From<BuyerDocument> for BuyerDocumentResponse {
    fn from(doc: BuyerDocument) -> Self {
        let image_url = data_url(&doc.file_type, &doc.file_data);
        Self {
            document_id: doc.document_id,
            filename: doc.filename,
            file_type: doc.file_type,
            datetime_uploaded: doc.datetime_uploaded.to_rfc3339(),
            buyer_id: doc.buyer_id,
            document_tag: doc.document_tag,
            image_url,
        }
    }
}
