//! Selector Infrastructure
//!
//! Candidate elements are gathered with a broad CSS selector and then
//! filtered by a Rust predicate, so every attribute heuristic lives in one
//! place ([`noise`]) instead of being spread across selector strings.

use dom_query::{Document, Selection};

pub mod noise;
pub mod utils;

/// Collect every element matched by `css` for which `rule` holds.
///
/// The match set is a snapshot taken before the caller mutates anything,
/// in document order.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::selector::{self, utils};
/// use webfetch_clean::dom::Document;
///
/// let doc = Document::from(r#"<div><p class="item">1</p><p>2</p><p class="item">3</p></div>"#);
/// let items = selector::select_where(&doc, "p", |sel| utils::class(sel).contains("item"));
/// assert_eq!(items.len(), 2);
/// ```
#[must_use]
pub fn select_where<'a>(
    doc: &'a Document,
    css: &str,
    rule: impl Fn(&Selection) -> bool,
) -> Vec<Selection<'a>> {
    doc.select(css)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}
