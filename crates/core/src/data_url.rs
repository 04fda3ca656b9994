//! Inline data-URL assembly for query responses.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

/// Build a self-describing `data:` URL embedding the MIME type and the
/// base64-encoded payload.
pub fn data_url(file_type: &str, data: &[u8]) -> String {
    format!("data:{file_type};base64,{}", BASE64_STANDARD.encode(data))
}
