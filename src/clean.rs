//! Cleaning entry point: parse, run the passes, serialize.
//!
//! The document lives only inside [`clean_page`]; callers get the
//! serialized markup back, never the tree.

use log::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::html_processing::{self, Stage};
use crate::metadata;
use crate::options::Options;
use crate::selector::noise::NoiseRules;

/// Output of one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedPage {
    /// Cleaned, serialized markup.
    pub html: String,

    /// Page title captured before `<head>` was removed.
    pub title: Option<String>,
}

/// Clean one page.
///
/// Empty input is rejected before parsing. The run either completes every
/// pass or fails; there is no partial result.
pub fn clean_page(html: &str, options: &Options, rules: &NoiseRules) -> Result<CleanedPage> {
    if html.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!("starting cleaning run ({} bytes, {options:?})", html.len());

    let document = dom::parse(html)?;
    debug!("{}", Stage::Parsed);

    let title = metadata::extract_title(&document);

    html_processing::doc_cleaning(&document, options, rules);

    let cleaned = dom::serialize(&document);
    debug!("{}: {} bytes", Stage::Serialized, cleaned.len());

    Ok(CleanedPage {
        html: cleaned,
        title,
    })
}
