//! HTML Processing: the cleaning pipeline.
//!
//! [`doc_cleaning`] applies a fixed, ordered sequence of passes to a parsed
//! document. Each pass works on the live tree left by the previous one, and
//! nothing removed is ever restored. A pass that matches nothing is a no-op.
//!
//! Order:
//! 1. main-content isolation (optional)
//! 2. structural noise (`head`, `script`, `style`, `nav`)
//! 3. ads, "advertisement", banners
//! 4. iframes
//! 5. `footer`/`aside`, then the clutter categories
//! 6. images (optional)
//! 7. attribute normalization

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use log::{debug, log_enabled, trace, Level};

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::{
    CHROME_SELECTOR, CONTENT_REGION_SELECTOR, FRAME_SELECTOR, IMAGE_SELECTOR,
    STRUCTURAL_NOISE_SELECTOR,
};
use crate::selector::noise::{
    classify, AdRule, ElementSignals, MatchScope, NoiseRule, NoiseRules, Verdict,
    ADVERTISEMENT_RULE, BANNER_RULE, CLUTTER_RULES,
};
use crate::selector;

/// Attributes that survive normalization. Everything else is stripped.
pub static ALLOWED_ATTRIBUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["href", "src", "alt", "title"].into_iter().collect()
});

/// Where a document is in the cleaning sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Parsed,
    MainIsolated,
    StructurallyPruned,
    NoiseStripped,
    FramesStripped,
    ClutterStripped,
    ImagesStripped,
    AttributesNormalized,
    Serialized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parsed => "parsed",
            Self::MainIsolated => "main-isolated",
            Self::StructurallyPruned => "structurally-pruned",
            Self::NoiseStripped => "noise-stripped",
            Self::FramesStripped => "frames-stripped",
            Self::ClutterStripped => "clutter-stripped",
            Self::ImagesStripped => "images-stripped",
            Self::AttributesNormalized => "attributes-normalized",
            Self::Serialized => "serialized",
        };
        f.write_str(name)
    }
}

/// Run every cleaning pass over `doc` in order.
pub fn doc_cleaning(doc: &Document, opts: &Options, rules: &NoiseRules) {
    if opts.preserve_main_only {
        let isolated = isolate_main_content(doc);
        debug!("{}: content region found = {isolated}", Stage::MainIsolated);
    }

    let removed = remove_structural_noise(doc);
    debug!("{}: removed {removed} elements", Stage::StructurallyPruned);

    let removed = remove_ads(doc, &rules.ad);
    debug!("{}: removed {removed} elements", Stage::NoiseStripped);

    let removed = remove_frames(doc);
    debug!("{}: removed {removed} elements", Stage::FramesStripped);

    let removed = remove_clutter(doc);
    debug!("{}: removed {removed} elements", Stage::ClutterStripped);

    if opts.remove_images {
        let removed = remove_images(doc);
        debug!("{}: removed {removed} elements", Stage::ImagesStripped);
    }

    let stripped = strip_attributes(doc);
    debug!("{}: stripped {stripped} attributes", Stage::AttributesNormalized);
}

// === Passes ===

/// Replace the body's contents with the inner content of the first
/// `<main>`/`<article>` in document order.
///
/// Returns `false` (and leaves the body alone) when there is no such element.
pub fn isolate_main_content(doc: &Document) -> bool {
    let region = doc.select(CONTENT_REGION_SELECTOR).first();
    if !region.exists() {
        return false;
    }

    let inner = dom::inner_html(&region);
    dom::set_inner_html(&doc.select("body"), &inner);
    true
}

/// Remove `head`, `script`, `style` and `nav` subtrees.
pub fn remove_structural_noise(doc: &Document) -> usize {
    remove_matching(doc, STRUCTURAL_NOISE_SELECTOR)
}

/// Two-tier ad rule, then "advertisement", then banners (header exception).
pub fn remove_ads(doc: &Document, ad_rule: &AdRule) -> usize {
    let ads = selector::select_where(doc, MatchScope::ClassOrId.candidates(), |sel| {
        ad_rule.classify(&ElementSignals::from_selection(sel)) == Verdict::Remove
    });
    let mut removed = remove_all(&ads);

    removed += apply_rule(doc, &ADVERTISEMENT_RULE);
    removed += apply_rule(doc, &BANNER_RULE);
    removed
}

/// Remove every `<iframe>`.
pub fn remove_frames(doc: &Document) -> usize {
    remove_matching(doc, FRAME_SELECTOR)
}

/// Remove `footer`/`aside`, then apply the clutter categories in table order.
pub fn remove_clutter(doc: &Document) -> usize {
    let mut removed = remove_matching(doc, CHROME_SELECTOR);
    for rule in CLUTTER_RULES {
        let count = apply_rule(doc, rule);
        if count > 0 {
            debug!("{}: {count} elements", rule.category);
        }
        removed += count;
    }
    removed
}

/// Remove every `<img>`.
pub fn remove_images(doc: &Document) -> usize {
    remove_matching(doc, IMAGE_SELECTOR)
}

/// Attribute Normalizer: drop every attribute not in [`ALLOWED_ATTRIBUTES`].
///
/// Returns the number of attributes removed.
pub fn strip_attributes(doc: &Document) -> usize {
    let mut stripped = 0;
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        for (key, _) in dom::get_all_attributes(&sel) {
            if !ALLOWED_ATTRIBUTES.contains(dom::lower(&key).as_str()) {
                dom::remove_attribute(&sel, &key);
                stripped += 1;
            }
        }
    }
    stripped
}

// === Helpers ===

/// Remove every element the rule classifies as noise.
///
/// Candidates are evaluated against the tree as it stands when the rule
/// starts, then removed together.
fn apply_rule(doc: &Document, rule: &NoiseRule) -> usize {
    let doomed = selector::select_where(doc, rule.scope.candidates(), |sel| {
        classify(rule, &ElementSignals::for_rule(sel, rule)) == Verdict::Remove
    });
    remove_all(&doomed)
}

fn remove_matching(doc: &Document, css: &str) -> usize {
    let matched = doc.select(css);
    let count = matched.length();
    dom::remove(&matched);
    count
}

fn remove_all(selections: &[Selection]) -> usize {
    for sel in selections {
        if log_enabled!(Level::Trace) {
            trace!("removing <{}>", dom::tag_name(sel).unwrap_or_default());
        }
        dom::remove(sel);
    }
    selections.len()
}
