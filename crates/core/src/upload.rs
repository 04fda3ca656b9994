//! Multipart upload validation.
//!
//! Turns a loosely-typed multipart submission (optional file part plus a
//! string field map) into a strongly typed upload value, or a specific
//! rejection reason. Required-field sets are an explicit per-shape
//! configuration rather than ad-hoc key lookups at call sites.

use std::collections::HashMap;

use crate::error::CoreError;

/// Content type substituted when the client declares none (or the literal
/// string `"None"`, which some clients send for a missing type).
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// ---------------------------------------------------------------------------
// Shapes and roles
// ---------------------------------------------------------------------------

/// Which table schema a submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadShape {
    /// The general `documents` table (tied to a property transaction).
    General,
    /// The `buyer_documents` table (no property/seller association).
    BuyerOnly,
}

impl UploadShape {
    /// Form fields that must be present and non-empty for this shape.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            UploadShape::General => &["property_id", "uploaded_by", "document_tag"],
            UploadShape::BuyerOnly => &["buyer_id", "document_tag"],
        }
    }
}

/// Which side of the transaction submitted a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploaderRole {
    Buyer,
    Seller,
}

impl UploaderRole {
    /// Parse from the `uploaded_by` form value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            _ => Err(CoreError::Validation(
                "uploaded_by must be either 'buyer' or 'seller'".into(),
            )),
        }
    }

    /// The database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }
}

// ---------------------------------------------------------------------------
// Wire input
// ---------------------------------------------------------------------------

/// The file part of a multipart submission, as received off the wire.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Client-declared filename. May be empty for a blank file input.
    pub filename: String,
    /// Client-declared content type, if any.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Validated outputs
// ---------------------------------------------------------------------------

/// A validated general-table submission, ready for insertion.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub filename: String,
    pub file_type: String,
    pub data: Vec<u8>,
    pub property_id: String,
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
    pub uploaded_by: UploaderRole,
    pub document_tag: String,
}

/// A validated buyer-only submission.
#[derive(Debug, Clone)]
pub struct BuyerDocumentUpload {
    pub filename: String,
    pub file_type: String,
    pub data: Vec<u8>,
    pub buyer_id: String,
    pub document_tag: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a general-shape submission.
///
/// Checks run in order and stop at the first failure:
/// 1. a file part is present,
/// 2. its filename is non-empty,
/// 3. `property_id`, `uploaded_by`, `document_tag` are all present
///    (missing fields are collected and reported together),
/// 4. `uploaded_by` parses as [`UploaderRole`],
/// 5. the id matching the role (`buyer_id` / `seller_id`) is present.
pub fn validate_document_upload(
    file: Option<FilePart>,
    fields: &HashMap<String, String>,
) -> Result<DocumentUpload, CoreError> {
    let file = check_file(file)?;
    check_required_fields(fields, UploadShape::General)?;

    let uploaded_by = UploaderRole::parse(&fields["uploaded_by"])?;

    let buyer_id = optional_field(fields, "buyer_id");
    let seller_id = optional_field(fields, "seller_id");
    match uploaded_by {
        UploaderRole::Buyer if buyer_id.is_none() => {
            return Err(CoreError::Validation(
                "buyer_id is required when uploaded_by is 'buyer'".into(),
            ));
        }
        UploaderRole::Seller if seller_id.is_none() => {
            return Err(CoreError::Validation(
                "seller_id is required when uploaded_by is 'seller'".into(),
            ));
        }
        _ => {}
    }

    let file_type = resolve_content_type(file.content_type.as_deref());
    Ok(DocumentUpload {
        filename: file.filename,
        file_type,
        data: file.data,
        property_id: fields["property_id"].clone(),
        buyer_id,
        seller_id,
        uploaded_by,
        document_tag: fields["document_tag"].clone(),
    })
}

/// Validate a buyer-only submission (`buyer_id` and `document_tag` required).
pub fn validate_buyer_document_upload(
    file: Option<FilePart>,
    fields: &HashMap<String, String>,
) -> Result<BuyerDocumentUpload, CoreError> {
    let file = check_file(file)?;
    check_required_fields(fields, UploadShape::BuyerOnly)?;

    let file_type = resolve_content_type(file.content_type.as_deref());
    Ok(BuyerDocumentUpload {
        filename: file.filename,
        file_type,
        data: file.data,
        buyer_id: fields["buyer_id"].clone(),
        document_tag: fields["document_tag"].clone(),
    })
}

/// Ensure a file part exists and carries a filename.
fn check_file(file: Option<FilePart>) -> Result<FilePart, CoreError> {
    let file = file.ok_or_else(|| CoreError::Validation("No file provided".into()))?;
    if file.filename.is_empty() {
        return Err(CoreError::Validation("No file selected".into()));
    }
    Ok(file)
}

/// Collect all missing required fields for `shape` and report them together.
///
/// A field that is present but empty counts as missing.
fn check_required_fields(
    fields: &HashMap<String, String>,
    shape: UploadShape,
) -> Result<(), CoreError> {
    let missing: Vec<&str> = shape
        .required_fields()
        .iter()
        .copied()
        .filter(|name| optional_field(fields, name).is_none())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// A field value, treating absent and empty-string the same way.
fn optional_field(fields: &HashMap<String, String>, name: &str) -> Option<String> {
    fields
        .get(name)
        .filter(|v| !v.is_empty())
        .map(|v| v.clone())
}

/// Resolve the declared content type, substituting the default when the
/// client sent nothing usable.
fn resolve_content_type(declared: Option<&str>) -> String {
    match declared {
        Some(ct) if !ct.is_empty() && ct != "None" => ct.to_string(),
        _ => DEFAULT_CONTENT_TYPE.to_string(),
    }
}
