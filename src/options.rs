//! Configuration for cleaning runs and fetch requests.
//!
//! [`Options`] holds the only two knobs the cleaning pipeline reads.
//! [`RequestConfig`] is what the CLI and RPC front ends assemble before
//! handing a request to [`crate::process_url`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration options for the cleaning pipeline.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::Options;
///
/// let options = Options {
///     preserve_main_only: true,
///     ..Options::default()
/// };
/// assert!(!options.remove_images);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Keep only the inner content of the first `<main>` or `<article>`.
    ///
    /// No-op when the page has neither element.
    ///
    /// Default: `false`
    pub preserve_main_only: bool,

    /// Remove every `<img>` element.
    ///
    /// Default: `false`
    pub remove_images: bool,
}

/// Rendering mode for cleaned markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Cleaned markup as-is.
    Html,
    /// Structural Markdown conversion.
    #[default]
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "markdown" => Ok(Self::Markdown),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A single fetch-clean-render request as assembled by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    /// Page to fetch.
    pub url: String,

    /// Requested output format, kept as the caller's raw string so an
    /// unsupported value is reported in the result rather than rejected early.
    pub format: String,

    /// Cleaning flags.
    pub options: Options,

    /// HTTP timeout in seconds; `0` disables the timeout.
    pub timeout_secs: u64,

    /// Destination file (CLI only). `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl RequestConfig {
    /// Request for `url` with every other setting at its default.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            format: OutputFormat::default().to_string(),
            options: Options::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: None,
        }
    }
}
