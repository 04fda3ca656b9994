//! Route definitions for the document endpoints.
//!
//! All routes are mounted at the application root.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{buyer_documents, documents};
use crate::state::AppState;

/// Document routes.
///
/// ```text
/// POST   /documents              -> upload_document
/// POST   /documents/buyer        -> upload_buyer_document
/// GET    /documents/query        -> query_documents
/// GET    /documents/query/buyer  -> query_buyer_documents
/// DELETE /documents/buyer/delete -> delete_buyer_documents
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/documents", post(documents::upload_document))
        .route("/documents/buyer", post(buyer_documents::upload_buyer_document))
        .route("/documents/query", get(documents::query_documents))
        .route(
            "/documents/query/buyer",
            get(buyer_documents::query_buyer_documents),
        )
        .route(
            "/documents/buyer/delete",
            delete(buyer_documents::delete_buyer_documents),
        )
}
