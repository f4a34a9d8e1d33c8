//! Request processing: fetch, clean, render.

use log::{info, warn};

use crate::clean::clean_page;
use crate::error::{Error, Result};
use crate::fetch::Retriever;
use crate::markdown;
use crate::options::RequestConfig;
use crate::result::CleanResult;
use crate::selector::noise::NoiseRules;
use crate::url_utils::extract_hostname;

/// Run one request end to end.
///
/// Never fails: any error ends up in [`CleanResult::error`] with empty
/// content.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::{process_url, FetchError, RequestConfig, Retriever};
///
/// struct Static;
///
/// impl Retriever for Static {
///     fn fetch(&self, _url: &str, _timeout: u64) -> Result<String, FetchError> {
///         Ok("<html><body><p>Hello</p><script>x()</script></body></html>".to_string())
///     }
/// }
///
/// let mut config = RequestConfig::new("https://example.com");
/// config.format = "html".to_string();
///
/// let result = process_url(&config, &Static);
/// assert!(result.error.is_none());
/// assert!(!result.content.contains("<script"));
/// ```
pub fn process_url(config: &RequestConfig, retriever: &dyn Retriever) -> CleanResult {
    process_url_with_rules(config, retriever, &NoiseRules::default())
}

/// [`process_url`] with custom noise rules.
pub fn process_url_with_rules(
    config: &RequestConfig,
    retriever: &dyn Retriever,
    rules: &NoiseRules,
) -> CleanResult {
    let result = CleanResult::new(&config.url, &config.format);
    let host = extract_hostname(&config.url).unwrap_or_else(|| config.url.clone());

    match run(config, retriever, rules) {
        Ok((content, title)) => {
            info!(
                "{host}: {} bytes of {} ({})",
                content.len(),
                config.format,
                title.as_deref().unwrap_or("untitled")
            );
            CleanResult {
                content,
                title,
                ..result
            }
        }
        Err(err) => {
            warn!("{host}: {err}");
            result.with_error(err)
        }
    }
}

fn run(
    config: &RequestConfig,
    retriever: &dyn Retriever,
    rules: &NoiseRules,
) -> Result<(String, Option<String>)> {
    let html = retriever
        .fetch(&config.url, config.timeout_secs)
        .map_err(Error::from)?;
    let page = clean_page(&html, &config.options, rules)?;
    let content = markdown::convert_str(&page.html, &config.format)?;
    Ok((content, page.title))
}
