//! Page retrieval over HTTP.
//!
//! The [`Retriever`] trait is the seam between request processing and the
//! network; [`HttpRetriever`] is the real implementation.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};

use crate::encoding::transcode_to_utf8;
use crate::error::FetchError;
use crate::url_utils::validate_url;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "webfetch-clean/1.0 (HTML cleaning tool)";

/// `Accept` header sent with every request.
pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// `Accept-Language` header sent with every request.
pub const ACCEPT_LANGUAGE_HEADER: &str = "en-US,en;q=0.9";

/// Something that turns a URL into page markup.
pub trait Retriever {
    /// Fetch `url` and return its body as UTF-8 text.
    ///
    /// `timeout_secs == 0` means no timeout.
    ///
    /// # Errors
    ///
    /// Returns a classified [`FetchError`] for bad URLs, transport failures,
    /// non-200 statuses and empty bodies.
    fn fetch(&self, url: &str, timeout_secs: u64) -> Result<String, FetchError>;
}

/// Blocking HTTP retriever.
///
/// Redirects are followed; only the final status is classified.
#[derive(Debug, Clone, Default)]
pub struct HttpRetriever;

impl HttpRetriever {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn client(timeout_secs: u64) -> Result<Client, FetchError> {
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

impl Retriever for HttpRetriever {
    fn fetch(&self, url: &str, timeout_secs: u64) -> Result<String, FetchError> {
        let url = validate_url(url)?;
        let client = Self::client(timeout_secs)?;

        debug!("GET {url} (timeout {timeout_secs}s)");

        let response = client
            .get(url)
            .header(ACCEPT, ACCEPT_HEADER)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_HEADER)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if let Some(err) = FetchError::from_status(status) {
            return Err(err);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .map_err(|e| FetchError::Body(e.to_string()))?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        debug!(
            "received {} bytes (content-type: {})",
            body.len(),
            content_type.as_deref().unwrap_or("none")
        );

        Ok(transcode_to_utf8(&body, content_type.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;

    #[test]
    fn test_fetch_sends_identifying_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/page")
                .header("user-agent", USER_AGENT)
                .header("accept", ACCEPT_HEADER)
                .header("accept-language", ACCEPT_LANGUAGE_HEADER);
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body><p>hi</p></body></html>");
        });

        let body = HttpRetriever::new().fetch(&server.url("/page"), 5);

        mock.assert();
        assert_eq!(body.ok().as_deref(), Some("<html><body><p>hi</p></body></html>"));
    }

    #[test]
    fn test_status_classification() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(503);
        });
        server.mock(|when, then| {
            when.method(GET).path("/nothing");
            then.status(204);
        });

        let retriever = HttpRetriever::new();
        assert!(matches!(
            retriever.fetch(&server.url("/missing"), 5),
            Err(FetchError::ClientError(404))
        ));
        assert!(matches!(
            retriever.fetch(&server.url("/broken"), 5),
            Err(FetchError::ServerError(503))
        ));
        assert!(matches!(
            retriever.fetch(&server.url("/nothing"), 5),
            Err(FetchError::UnexpectedStatus(204))
        ));
    }

    #[test]
    fn test_empty_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/empty");
            then.status(200).body("");
        });

        let result = HttpRetriever::new().fetch(&server.url("/empty"), 5);
        assert!(matches!(result, Err(FetchError::EmptyBody)));
    }

    #[test]
    fn test_zero_timeout_is_unbounded() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<p>ok</p>");
        });

        let result = HttpRetriever::new().fetch(&server.url("/"), 0);
        assert_eq!(result.ok().as_deref(), Some("<p>ok</p>"));
    }

    #[test]
    fn test_bad_urls_never_hit_the_network() {
        let retriever = HttpRetriever::new();
        assert!(matches!(retriever.fetch("", 5), Err(FetchError::EmptyUrl)));
        assert!(matches!(
            retriever.fetch("not a url", 5),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            retriever.fetch("file:///etc/passwd", 5),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        // Port 9 (discard) is closed on test hosts.
        let result = HttpRetriever::new().fetch("http://127.0.0.1:9/", 2);
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
