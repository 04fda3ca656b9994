//! Document entity models and query-parameter DTOs.
//!
//! Covers two related tables:
//! - `documents` -- general documents tied to a property transaction
//! - `buyer_documents` -- buyer-only documents with no property/seller link

use deedstore_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A row from the `documents` table.
///
/// Raw `file_data` bytes stay in the database layer; the API crate encodes
/// them into a data-URL before anything is serialized.
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub document_id: DbId,
    pub filename: String,
    pub file_type: String,
    pub file_data: Vec<u8>,
    pub datetime_uploaded: Timestamp,
    pub property_id: String,
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
    pub uploaded_by: String,
    pub document_tag: String,
}

/// Optional equality filters for `documents` queries.
///
/// Doubles as the query-string DTO for `GET /documents/query`; absent and
/// empty parameters contribute no condition.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DocumentFilter {
    pub uploaded_by: Option<String>,
    pub property_id: Option<String>,
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
    pub document_tag: Option<String>,
}

// ---------------------------------------------------------------------------
// BuyerDocument
// ---------------------------------------------------------------------------

/// A row from the `buyer_documents` table.
#[derive(Debug, Clone, FromRow)]
pub struct BuyerDocument {
    pub document_id: DbId,
    pub filename: String,
    pub file_type: String,
    pub file_data: Vec<u8>,
    pub datetime_uploaded: Timestamp,
    pub buyer_id: String,
    pub document_tag: String,
}

/// Query-string DTO for the buyer-only endpoints. `buyer_id` is optional
/// here so its absence can be rejected with a specific message instead of
/// a generic deserialization error.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BuyerDocumentFilter {
    pub buyer_id: Option<String>,
    pub document_tag: Option<String>,
}
