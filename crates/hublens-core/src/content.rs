//! File content decoding and preview truncation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ContentError;

/// Maximum number of characters shown in a file preview.
pub const PREVIEW_MAX_CHARS: usize = 2000;

/// Decode a base64 payload into UTF-8 text.
///
/// The contents endpoint hard-wraps payloads with newlines; any ASCII
/// whitespace is stripped before decoding. Decoded bytes that are not valid
/// UTF-8 are reported as [`ContentError::Binary`] rather than rendered.
pub fn decode_base64_text(payload: &str) -> Result<String, ContentError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ContentError::InvalidBase64(e.to_string()))?;

    String::from_utf8(bytes).map_err(|_| ContentError::Binary)
}

/// First `max_chars` characters of `text`.
///
/// Counts characters, not bytes, so multi-byte sequences are never split.
pub fn truncate_preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_text() {
        // base64("hello world")
        assert_eq!(decode_base64_text("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
    }

    #[test]
    fn test_decode_wrapped_payload() {
        // The service wraps long payloads with embedded newlines.
        let wrapped = "aGVsbG8g\nd29y\nbGQ=\n";
        assert_eq!(decode_base64_text(wrapped).unwrap(), "hello world");
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_base64_text("not@base64!"),
            Err(ContentError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_decode_rejects_binary() {
        // base64([0xff, 0xfe]) - not valid UTF-8
        assert_eq!(decode_base64_text("//4="), Err(ContentError::Binary));
    }

    #[test]
    fn test_truncate_short_input_untouched() {
        assert_eq!(truncate_preview("hello", PREVIEW_MAX_CHARS), "hello");
        assert_eq!(truncate_preview("", PREVIEW_MAX_CHARS), "");
    }

    #[test]
    fn test_truncate_caps_length() {
        let long = "x".repeat(PREVIEW_MAX_CHARS + 100);
        let preview = truncate_preview(&long, PREVIEW_MAX_CHARS);
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn test_truncate_exact_boundary() {
        let exact = "y".repeat(PREVIEW_MAX_CHARS);
        assert_eq!(truncate_preview(&exact, PREVIEW_MAX_CHARS), exact);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Each 'é' is two bytes; truncation must not split one.
        let text = "é".repeat(10);
        let preview = truncate_preview(&text, 4);
        assert_eq!(preview, "éééé");
    }
}
