//! Domain logic for the deedstore document service.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! upload validation, data-URL assembly, and common types.

pub mod data_url;
pub mod error;
pub mod types;
pub mod upload;
