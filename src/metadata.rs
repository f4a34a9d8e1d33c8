//! Page title extraction.
//!
//! Runs on the freshly parsed document, before the cleaning passes remove
//! `<head>`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::WHITESPACE_NORMALIZE;

/// Find the page title.
///
/// Sources in order: `<title>`, `og:title` meta tag, first non-empty `<h1>`.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    examine_title_element(doc)
        .or_else(|| examine_open_graph_title(doc))
        .or_else(|| examine_first_heading(doc))
}

fn examine_title_element(doc: &Document) -> Option<String> {
    normalized(&dom::text_content(&doc.select("title").first()))
}

fn examine_open_graph_title(doc: &Document) -> Option<String> {
    doc.select("meta[property='og:title']")
        .nodes()
        .iter()
        .find_map(|node| {
            let meta = Selection::from(*node);
            normalized(&dom::get_attribute(&meta, "content").unwrap_or_default())
        })
}

fn examine_first_heading(doc: &Document) -> Option<String> {
    doc.select("h1")
        .nodes()
        .iter()
        .find_map(|node| normalized(&dom::text_content(&Selection::from(*node))))
}

/// Collapse whitespace; `None` when nothing is left.
fn normalized(text: &str) -> Option<String> {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(text.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.into_owned())
    }
}
