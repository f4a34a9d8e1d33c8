//! Result type for a processed request.
//!
//! This is the payload both front ends emit: the CLI prints `content` (or
//! `error`), the RPC server embeds the whole record as JSON text.

use serde::{Deserialize, Serialize};

/// Outcome of fetching, cleaning and rendering one URL.
///
/// Exactly one of `content` and `error` is meaningful: a failed request has
/// an empty `content` and a populated `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanResult {
    /// Rendered page (HTML or Markdown).
    pub content: String,

    /// URL as requested.
    pub url: String,

    /// Page title, if one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Format name as requested.
    pub format: String,

    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CleanResult {
    /// Empty result for `url`/`format`, to be filled in by processing.
    #[must_use]
    pub fn new(url: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: format.into(),
            ..Self::default()
        }
    }

    /// Record a failure. Any content gathered so far is dropped.
    #[must_use]
    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.content.clear();
        self.title = None;
        self.error = Some(error.to_string());
        self
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
