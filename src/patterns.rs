//! Static selectors, pattern fragments and compiled regexes.
//!
//! Everything here is immutable for the process lifetime. Regexes are
//! compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// CSS Selectors (tag-based passes)
// =============================================================================

/// Elements that delimit the content region.
pub const CONTENT_REGION_TAGS: &[&str] = &["main", "article"];

/// Selector for the content region, first match in document order wins.
pub const CONTENT_REGION_SELECTOR: &str = "main, article";

/// Elements that never carry content.
pub const STRUCTURAL_NOISE_SELECTOR: &str = "head, script, style, nav";

/// Embedded frames (ads, trackers, embeds).
pub const FRAME_SELECTOR: &str = "iframe";

/// Page chrome removed unconditionally before the category rules run.
pub const CHROME_SELECTOR: &str = "footer, aside";

pub const IMAGE_SELECTOR: &str = "img";

/// Candidates for attribute-based rules matching `class` or `id`.
pub const CLASS_OR_ID_SELECTOR: &str = "[class], [id]";

/// Candidates for attribute-based rules matching `class` only.
pub const CLASS_SELECTOR: &str = "[class]";

// =============================================================================
// Noise Pattern Fragments
// =============================================================================

/// Generic ad signal; alone it is too ambiguous ("header", "thread", "load").
pub const AD_SIGNAL: &str = "ad";

/// Higher-precision ad fragments, matched against `class + " " + id`.
pub const DEFAULT_AD_FRAGMENTS: &[&str] = &[
    "advertisement",
    "adsbygoogle",
    "ad-",
    "-ad-",
    "-ad",
    "_ad_",
    "_ad",
    "ad_",
    " ad ",
];

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

/// Matches HTML comments and start/end/self-closing tags.
pub static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][A-Za-z0-9:-]*(?:\s[^<>]*)?/?>")
        .expect("HTML_TAG regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tag_matches_tags_only() {
        assert!(HTML_TAG.is_match("<div>"));
        assert!(HTML_TAG.is_match("</span>"));
        assert!(HTML_TAG.is_match(r#"<img src="a.png" />"#));
        assert!(HTML_TAG.is_match("<!-- note -->"));
        assert!(!HTML_TAG.is_match("a < b and c > d"));
        assert!(!HTML_TAG.is_match("<https://example.com>"));
    }

    #[test]
    fn test_multiple_newlines() {
        assert_eq!(MULTIPLE_NEWLINES.replace_all("a\n\n\n\nb", "\n\n"), "a\n\nb");
        assert_eq!(MULTIPLE_NEWLINES.replace_all("a\n\nb", "\n\n"), "a\n\nb");
    }

    #[test]
    fn test_ad_fragments_are_lowercase() {
        for fragment in DEFAULT_AD_FRAGMENTS {
            assert_eq!(*fragment, fragment.to_lowercase());
            assert!(fragment.contains(AD_SIGNAL));
        }
    }
}
