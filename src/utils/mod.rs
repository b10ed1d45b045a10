// Utility functions
// Helper functions for common operations

pub mod html;

pub use html::{class_list, encode};

/// Percent-decode a trigger URL
///
/// Hosts often emit already-encoded URLs in `href`. Decoding failures are not
/// fatal: the raw value is returned unchanged.
pub fn decode_url(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::debug!("URL decode failed for '{}', using raw value: {}", raw, e);
            raw.to_string()
        }
    }
}

/// Return the value, untrimmed, unless it is empty or only whitespace
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
