//! Error types for webfetch-clean.
//!
//! [`Error`] covers the cleaning core and the renderer; [`FetchError`] is the
//! retriever's classified failure and converts into [`Error::Fetch`].

/// Error type for cleaning, rendering and request processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty markup was handed to the pipeline or the renderer.
    #[error("HTML content cannot be empty")]
    EmptyInput,

    /// HTML parsing failed.
    #[error("failed to parse HTML: {0}")]
    ParseError(String),

    /// Output format other than `html` or `markdown`.
    #[error("unsupported format: {0} (use 'html' or 'markdown')")]
    UnsupportedFormat(String),

    /// The page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classified retrieval failure.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport failure, DNS failure or timeout.
    #[error("failed to fetch URL: {0}")]
    Network(String),

    /// HTTP 5xx.
    #[error("server error (HTTP {0})")]
    ServerError(u16),

    /// HTTP 4xx.
    #[error("page not found or forbidden (HTTP {0})")]
    ClientError(u16),

    /// Any other non-200 status that survived redirect handling.
    #[error("unexpected status code: HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("no content received from URL")]
    EmptyBody,
}

impl FetchError {
    /// Classify a final HTTP status. `None` means the status is acceptable.
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            500.. => Some(Self::ServerError(status)),
            400..=499 => Some(Self::ClientError(status)),
            _ => Some(Self::UnexpectedStatus(status)),
        }
    }
}

/// Result type alias for webfetch-clean operations.
pub type Result<T> = std::result::Result<T, Error>;
