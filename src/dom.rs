//! DOM Operations Adapter
//!
//! Free functions over the `dom_query` crate giving the cleaning passes a
//! small, fixed vocabulary: parse, query, read/remove attributes, remove
//! subtrees, replace inner content, serialize.
//!
//! A [`Document`] is created per cleaning run and never leaves it; callers of
//! the crate only ever see the serialized string.

pub use dom_query::{Document, Selection};

use crate::error::{Error, Result};

// === Parsing / Serialization ===

/// Parse HTML string into a document.
///
/// Fails when the resulting tree has no `<body>` (frameset documents), since
/// every cleaning pass is scoped to the body.
pub fn parse(html: &str) -> Result<Document> {
    let doc = Document::from(html);
    if !doc.select("body").exists() {
        return Err(Error::ParseError("document has no body element".to_string()));
    }
    Ok(doc)
}

/// Serialize the whole document back to markup.
#[must_use]
pub fn serialize(doc: &Document) -> String {
    doc.html().to_string()
}

// === Case Folding ===

/// Lowercase helper shared by the classifier and the structural passes.
#[inline]
#[must_use]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs, in document order.
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| lower(&t))
}

/// Check whether any ancestor of the first node has one of `tags`.
///
/// Walks the live tree, so a subtree detached by an earlier pass has no
/// ancestors beyond its own detached root.
#[must_use]
pub fn has_ancestor(sel: &Selection, tags: &[&str]) -> bool {
    let Some(node) = sel.nodes().first() else {
        return false;
    };

    let mut current = node.parent();
    while let Some(parent) = current {
        if parent
            .node_name()
            .is_some_and(|name| tags.iter().any(|tag| name.eq_ignore_ascii_case(tag)))
        {
            return true;
        }
        current = parent.parent();
    }
    false
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

// === Tree Manipulation ===

/// Remove elements (and their subtrees) from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Replace the children of every node in `sel` with parsed `html`
#[inline]
pub fn set_inner_html(sel: &Selection, html: &str) {
    sel.set_html(html);
}
