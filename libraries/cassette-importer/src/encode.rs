//! File content encoding
//!
//! Stored audio is kept as a `data:<mime>;base64,<payload>` string so it can be
//! handed to a playback element as-is.

use base64::Engine as _;
use mime_guess::mime;

const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type guessed from the file name
pub fn mime_for(file_name: &str) -> Option<mime::Mime> {
    mime_guess::from_path(file_name).first()
}

/// Whether the file input's audio filter accepts this name
pub fn is_audio(file_name: &str) -> bool {
    mime_for(file_name).is_some_and(|m| m.type_() == mime::AUDIO)
}

/// Encode raw bytes as a data URI
pub fn to_data_uri(file_name: &str, bytes: &[u8]) -> String {
    let mime = mime_for(file_name).map_or_else(|| FALLBACK_MIME.to_string(), |m| m.to_string());
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Split a data URI back into its MIME type and decoded bytes
///
/// Returns `None` when the string is not a base64 data URI.
pub fn from_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    Some((mime.to_string(), bytes))
}
