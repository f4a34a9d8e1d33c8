//! Attribute helpers used by selector rules.
//!
//! All values come back lowercased, so rules compare against lowercase
//! patterns only.

use crate::dom;
use crate::patterns::CONTENT_REGION_TAGS;
use dom_query::Selection;

/// Lowercased `id` attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::lower(&dom::id(sel).unwrap_or_default())
}

/// Lowercased `class` attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::lower(&dom::class_name(sel).unwrap_or_default())
}

/// Whether the element sits inside a `<main>` or `<article>`.
#[inline]
#[must_use]
pub fn in_content_region(sel: &Selection) -> bool {
    dom::has_ancestor(sel, CONTENT_REGION_TAGS)
}
