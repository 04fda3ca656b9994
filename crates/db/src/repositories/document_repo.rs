//! Repository for the `documents` table.

use deedstore_core::upload::DocumentUpload;
use sqlx::PgPool;

use crate::filter::SqlFilter;
use crate::models::document::{Document, DocumentFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "document_id, filename, file_type, file_data, datetime_uploaded, \
     property_id, buyer_id, seller_id, uploaded_by, document_tag";

/// Provides insert and filtered-read operations for general documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a validated upload, returning the created row.
    pub async fn create(pool: &PgPool, upload: &DocumentUpload) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents \
                 (filename, file_type, file_data, property_id, buyer_id, seller_id, \
                  uploaded_by, document_tag) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(&upload.filename)
            .bind(&upload.file_type)
            .bind(&upload.data)
            .bind(&upload.property_id)
            .bind(&upload.buyer_id)
            .bind(&upload.seller_id)
            .bind(upload.uploaded_by.as_str())
            .bind(&upload.document_tag)
            .fetch_one(pool)
            .await
    }

    /// Fetch all rows matching the filter, most recent upload first.
    ///
    /// Every present, non-empty filter contributes one equality condition;
    /// with no filters the full table is returned.
    pub async fn query(
        pool: &PgPool,
        params: &DocumentFilter,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let mut filter = SqlFilter::new();
        filter.eq("uploaded_by", params.uploaded_by.as_deref());
        filter.eq("property_id", params.property_id.as_deref());
        filter.eq("buyer_id", params.buyer_id.as_deref());
        filter.eq("seller_id", params.seller_id.as_deref());
        filter.eq("document_tag", params.document_tag.as_deref());

        let query = format!(
            "SELECT {COLUMNS} FROM documents{} ORDER BY datetime_uploaded DESC",
            filter.where_clause()
        );

        let mut q = sqlx::query_as::<_, Document>(&query);
        for value in filter.values() {
            q = q.bind(value.as_str());
        }
        q.fetch_all(pool).await
    }
}
