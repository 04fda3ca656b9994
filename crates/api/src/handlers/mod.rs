//! HTTP handlers.

pub mod buyer_documents;
pub mod documents;

use std::collections::HashMap;

use axum::extract::Multipart;
use deedstore_core::upload::FilePart;

use crate::error::{AppError, AppResult};

/// Drain a multipart request into the file part (from the `file` field)
/// and a plain string map of the remaining form fields.
///
/// Validation of what was collected is the domain layer's job; this only
/// reads the wire format.
pub(crate) async fn collect_multipart(
    multipart: &mut Multipart,
) -> AppResult<(Option<FilePart>, HashMap<String, String>)> {
    let mut file: Option<FilePart> = None;
    let mut fields: HashMap<String, String> = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some(FilePart {
                filename,
                content_type,
                data: data.to_vec(),
            });
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.insert(name, text);
        }
    }

    Ok((file, fields))
}
