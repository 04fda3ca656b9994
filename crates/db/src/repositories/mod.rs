//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod buyer_document_repo;
pub mod document_repo;

pub use buyer_document_repo::BuyerDocumentRepo;
pub use document_repo::DocumentRepo;
