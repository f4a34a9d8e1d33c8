//! URL validation for the retriever.

use url::Url;

use crate::error::FetchError;

/// Parse and validate a URL to fetch.
///
/// Only absolute `http`/`https` URLs with a host are accepted.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::url_utils::validate_url;
///
/// assert!(validate_url("https://example.com/a").is_ok());
/// assert!(validate_url("ftp://example.com/a").is_err());
/// assert!(validate_url("").is_err());
/// ```
pub fn validate_url(url_str: &str) -> Result<Url, FetchError> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return Err(FetchError::EmptyUrl);
    }

    let url = Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{trimmed}: missing host")));
    }

    Ok(url)
}

/// Extract hostname from URL, for log lines.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
}
