//! Markdown rendering of cleaned markup.
//!
//! Conversion itself is delegated to `quick_html2md`; this module decides
//! when to convert and tidies the converter's output afterwards.

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::error::{Error, Result};
use crate::options::OutputFormat;
use crate::patterns::{HTML_TAG, MULTIPLE_NEWLINES};

const CODE_FENCE: &str = "```";
const TILDE_FENCE: &str = "~~~";

/// Render cleaned markup in the requested format.
///
/// `Html` hands the input back unchanged. `Markdown` runs [`to_markdown`].
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `html` is empty.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::markdown::convert;
/// use webfetch_clean::OutputFormat;
///
/// let html = "<p>Hello</p>";
/// assert_eq!(convert(html, OutputFormat::Html)?, html);
/// assert!(convert(html, OutputFormat::Markdown)?.contains("Hello"));
/// # Ok::<(), webfetch_clean::Error>(())
/// ```
pub fn convert(html: &str, format: OutputFormat) -> Result<String> {
    if html.is_empty() {
        return Err(Error::EmptyInput);
    }

    match format {
        OutputFormat::Html => Ok(html.to_string()),
        OutputFormat::Markdown => Ok(to_markdown(html)),
    }
}

/// Same as [`convert`], with the format given by name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for anything but `"html"` or
/// `"markdown"`, and [`Error::EmptyInput`] for empty markup.
pub fn convert_str(html: &str, format: &str) -> Result<String> {
    let format: OutputFormat = format.parse()?;
    convert(html, format)
}

/// Convert markup to Markdown, keeping links, images and tables.
#[must_use]
pub fn to_markdown(html: &str) -> String {
    let options = MarkdownOptions::new()
        .include_links(true)
        .include_images(true)
        .preserve_tables(true);

    post_process_markdown(&html_to_markdown_with_options(html, &options))
}

/// Tidy converter output.
///
/// - strips tag syntax the converter passed through, except inside fenced
///   or inline code
/// - trims trailing whitespace on every line
/// - collapses runs of three or more newlines to one blank line
/// - trims the whole result
///
/// ```rust
/// use webfetch_clean::markdown::post_process_markdown;
///
/// let md = "Text <span>kept</span>   \n\n\n\n`<b>` stays";
/// assert_eq!(post_process_markdown(md), "Text kept\n\n`<b>` stays");
/// ```
#[must_use]
pub fn post_process_markdown(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    let mut open_fence: Option<&str> = None;

    for line in markdown.lines() {
        let fence = fence_marker(line);

        match (open_fence, fence) {
            (None, Some(marker)) => {
                open_fence = Some(marker);
                lines.push(line.trim_end().to_string());
            }
            (Some(open), Some(marker)) if open == marker => {
                open_fence = None;
                lines.push(line.trim_end().to_string());
            }
            (Some(_), _) => lines.push(line.trim_end().to_string()),
            (None, None) => lines.push(strip_tags_outside_code(line).trim_end().to_string()),
        }
    }

    let joined = lines.join("\n");
    MULTIPLE_NEWLINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Fence marker a line opens or closes with, if any.
fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with(CODE_FENCE) {
        Some(CODE_FENCE)
    } else if trimmed.starts_with(TILDE_FENCE) {
        Some(TILDE_FENCE)
    } else {
        None
    }
}

/// Remove tag syntax from the parts of `line` not wrapped in backticks.
///
/// An unmatched trailing backtick leaves the remainder untouched.
fn strip_tags_outside_code(line: &str) -> String {
    if !line.contains('<') {
        return line.to_string();
    }

    let segments: Vec<&str> = line.split('`').collect();
    let balanced = segments.len() % 2 == 1;
    let mut out = String::with_capacity(line.len());

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('`');
        }
        let is_code = i % 2 == 1;
        let is_dangling = !balanced && i == segments.len() - 1;
        if is_code || is_dangling {
            out.push_str(segment);
        } else {
            out.push_str(&HTML_TAG.replace_all(segment, ""));
        }
    }

    out
}
