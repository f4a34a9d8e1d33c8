//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset is taken from the HTTP
//! `Content-Type` header when present, then from `<meta>` declarations in the
//! first kilobyte, and otherwise defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the document head scanned for `<meta>` charset declarations.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Match the `charset=` parameter of an HTTP `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect character encoding of a fetched document.
///
/// Order of precedence:
/// 1. `charset` parameter of the `Content-Type` header
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LIMIT)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .or_else(|| extract_content_type_charset(&head_str))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Extract the charset label from a `Content-Type` header value.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode fetched bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD; this never fails. A leading byte order
/// mark is removed.
///
/// # Examples
///
/// ```
/// use webfetch_clean::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = transcode_to_utf8(html, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);

    // A byte order mark overrides the detected encoding and is stripped.
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
