//! # webfetch-clean
//!
//! Fetch a web page, strip everything that is not content, and hand back
//! clean HTML or Markdown.
//!
//! The cleaning pipeline removes scripts, styles, navigation, advertising,
//! banners, iframes, footers, sidebars, menus, popups, modals, cookie
//! notices, social widgets and comment sections, then drops every attribute
//! except `href`, `src`, `alt` and `title`.
//!
//! ## Quick Start
//!
//! ```rust
//! use webfetch_clean::{clean_html, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav>Home | About</nav>
//! <article><p class="lead">Main content here.</p></article>
//! <div class="ad-banner">Buy now</div></body></html>"#;
//!
//! let cleaned = clean_html(html, &Options::default())?;
//! assert!(cleaned.contains("<p>Main content here.</p>"));
//! assert!(!cleaned.contains("Buy now"));
//! # Ok::<(), webfetch_clean::Error>(())
//! ```
//!
//! ## Front ends
//!
//! - [`process_url`] runs fetch, clean and render for one URL and never
//!   fails; errors are carried in [`CleanResult::error`].
//! - [`rpc::Server`] exposes the same operation as a JSON-RPC tool over
//!   line-delimited stdio.
//! - The `webfetch-clean` binary wraps both.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Noise classification rules.
pub mod selector;

/// Cleaning passes.
pub mod html_processing;

/// Cleaning entry point.
pub mod clean;

/// Title extraction.
pub mod metadata;

/// Markdown rendering.
pub mod markdown;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL validation.
pub mod url_utils;

/// HTTP retrieval.
pub mod fetch;

/// Request processing.
pub mod process;

/// JSON-RPC server.
pub mod rpc;

// Public API - re-exports
pub use clean::{clean_page, CleanedPage};
pub use error::{Error, FetchError, Result};
pub use fetch::{HttpRetriever, Retriever};
pub use options::{Options, OutputFormat, RequestConfig, DEFAULT_TIMEOUT_SECS};
pub use process::{process_url, process_url_with_rules};
pub use result::CleanResult;
pub use selector::noise::{AdRule, NoiseRules};

/// Cleans an HTML document using the default noise rules.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for empty input and [`Error::ParseError`]
/// when the document has no body to clean.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::{clean_html, Options};
///
/// let html = r#"<body><main><p>Kept</p></main><footer>Gone</footer></body>"#;
/// let options = Options {
///     preserve_main_only: true,
///     ..Options::default()
/// };
/// let cleaned = clean_html(html, &options)?;
/// assert!(cleaned.contains("<p>Kept</p>"));
/// assert!(!cleaned.contains("<main>"));
/// # Ok::<(), webfetch_clean::Error>(())
/// ```
pub fn clean_html(html: &str, options: &Options) -> Result<String> {
    clean_html_with_rules(html, options, &NoiseRules::default())
}

/// Cleans an HTML document with custom noise rules.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::{clean_html_with_rules, AdRule, NoiseRules, Options};
///
/// let rules = NoiseRules {
///     ad: AdRule::with_fragments(["sponsor"]),
/// };
/// let html = r#"<body><div class="ad sponsor-box">x</div><div class="ad-slot">y</div></body>"#;
/// let cleaned = clean_html_with_rules(html, &Options::default(), &rules)?;
/// assert!(!cleaned.contains(">x<"));
/// assert!(cleaned.contains(">y<"));
/// # Ok::<(), webfetch_clean::Error>(())
/// ```
pub fn clean_html_with_rules(html: &str, options: &Options, rules: &NoiseRules) -> Result<String> {
    clean_page(html, options, rules).map(|page| page.html)
}

/// Cleans raw HTML bytes, decoding them first.
///
/// The charset comes from `content_type` (an HTTP `Content-Type` value) when
/// given, then from `<meta>` declarations, then defaults to UTF-8.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::{clean_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let cleaned = clean_bytes(html, None, &Options::default())?;
/// assert!(cleaned.contains("Caf\u{e9}"));
/// # Ok::<(), webfetch_clean::Error>(())
/// ```
pub fn clean_bytes(html: &[u8], content_type: Option<&str>, options: &Options) -> Result<String> {
    let html_str = encoding::transcode_to_utf8(html, content_type);
    clean_html(&html_str, options)
}
