//! Repository for the `buyer_documents` table.

use deedstore_core::upload::BuyerDocumentUpload;
use sqlx::PgPool;

use crate::filter::SqlFilter;
use crate::models::document::BuyerDocument;

const COLUMNS: &str =
    "document_id, filename, file_type, file_data, datetime_uploaded, buyer_id, document_tag";

/// Provides insert, filtered-read, and delete-by-filter operations for
/// buyer-only documents.
pub struct BuyerDocumentRepo;

impl BuyerDocumentRepo {
    /// Insert a validated upload, returning the created row.
    pub async fn create(
        pool: &PgPool,
        upload: &BuyerDocumentUpload,
    ) -> Result<BuyerDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO buyer_documents \
                 (filename, file_type, file_data, buyer_id, document_tag) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BuyerDocument>(&query)
            .bind(&upload.filename)
            .bind(&upload.file_type)
            .bind(&upload.data)
            .bind(&upload.buyer_id)
            .bind(&upload.document_tag)
            .fetch_one(pool)
            .await
    }

    /// Fetch all documents for a buyer, optionally narrowed by tag, most
    /// recent upload first. Unlike the general table, `buyer_id` is always
    /// required here; callers enforce its presence before reaching the
    /// repository.
    pub async fn query(
        pool: &PgPool,
        buyer_id: &str,
        document_tag: Option<&str>,
    ) -> Result<Vec<BuyerDocument>, sqlx::Error> {
        let mut filter = SqlFilter::new();
        filter.eq("buyer_id", Some(buyer_id));
        filter.eq("document_tag", document_tag);

        let query = format!(
            "SELECT {COLUMNS} FROM buyer_documents{} ORDER BY datetime_uploaded DESC",
            filter.where_clause()
        );

        let mut q = sqlx::query_as::<_, BuyerDocument>(&query);
        for value in filter.values() {
            q = q.bind(value.as_str());
        }
        q.fetch_all(pool).await
    }

    /// Delete all documents matching `(buyer_id, document_tag)`.
    ///
    /// Idempotent: matching zero rows is not an error. Returns the number
    /// of rows removed.
    pub async fn delete_by_buyer_and_tag(
        pool: &PgPool,
        buyer_id: &str,
        document_tag: &str,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM buyer_documents WHERE buyer_id = $1 AND document_tag = $2")
                .bind(buyer_id)
                .bind(document_tag)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
