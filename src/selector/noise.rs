//! Noise Classifier
//!
//! Decides whether an element is page noise from its lowercased `class` and
//! `id` values. The heuristics are ordered rule tables: each [`NoiseRule`]
//! pairs a substring pattern with a category and an optional exception
//! predicate that turns a match back into [`Verdict::Keep`].
//!
//! The ad rule is separate ([`AdRule`]) because it is two-tiered: the bare
//! "ad" substring is only a signal, and removal also requires one of a list of
//! higher-precision fragments. That list is data, not code, and can be tuned
//! through [`NoiseRules`].
//!
//! Classification is a pure function of [`ElementSignals`]; the cleaning
//! pipeline builds the signals from the live tree when each pass runs.

use std::fmt;

use dom_query::Selection;

use crate::dom;
use crate::patterns::{AD_SIGNAL, DEFAULT_AD_FRAGMENTS};
use crate::selector::utils;

/// Category a noise rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseCategory {
    Ad,
    Advertisement,
    Banner,
    Sidebar,
    Menu,
    Popup,
    Modal,
    Cookie,
    Social,
    Share,
    Comment,
}

impl NoiseCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ad => "ad",
            Self::Advertisement => "advertisement",
            Self::Banner => "banner",
            Self::Sidebar => "sidebar",
            Self::Menu => "menu",
            Self::Popup => "popup",
            Self::Modal => "modal",
            Self::Cookie => "cookie",
            Self::Social => "social",
            Self::Share => "share",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for NoiseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one element against one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Remove,
    Keep,
}

/// Which attributes a rule's pattern is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Pattern in `class` or in `id`.
    ClassOrId,
    /// Pattern in `class` only.
    ClassOnly,
}

impl MatchScope {
    /// CSS selector for the candidate set of this scope.
    #[must_use]
    pub const fn candidates(self) -> &'static str {
        match self {
            Self::ClassOrId => crate::patterns::CLASS_OR_ID_SELECTOR,
            Self::ClassOnly => crate::patterns::CLASS_SELECTOR,
        }
    }
}

/// Lowercased view of the attributes a rule can look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSignals {
    pub class: String,
    pub id: String,
    /// Element is nested inside `<main>` or `<article>`.
    pub in_content_region: bool,
}

impl ElementSignals {
    /// Build signals from raw attribute values; lowercases both.
    #[must_use]
    pub fn new(class: &str, id: &str) -> Self {
        Self {
            class: dom::lower(class),
            id: dom::lower(id),
            in_content_region: false,
        }
    }

    #[must_use]
    pub fn inside_content_region(mut self, inside: bool) -> Self {
        self.in_content_region = inside;
        self
    }

    /// Read `class` and `id` from an element in the live tree.
    ///
    /// `in_content_region` is left `false`; see [`Self::for_rule`].
    #[must_use]
    pub fn from_selection(sel: &Selection) -> Self {
        Self {
            class: utils::class(sel),
            id: utils::id(sel),
            in_content_region: false,
        }
    }

    /// Signals for classifying `sel` against `rule`. The ancestor walk is
    /// only done when the pattern matched and the rule has an exception.
    #[must_use]
    pub fn for_rule(sel: &Selection, rule: &NoiseRule) -> Self {
        let signals = Self::from_selection(sel);
        if rule.exception.is_some() && rule.matches(&signals) {
            let inside = utils::in_content_region(sel);
            signals.inside_content_region(inside)
        } else {
            signals
        }
    }

    /// `class + " " + id`, the text the ad rule inspects.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{} {}", self.class, self.id)
    }
}

/// Predicate that keeps an element even though its rule matched.
pub type Exception = fn(&ElementSignals) -> bool;

/// One row of the noise pattern table.
#[derive(Debug, Clone, Copy)]
pub struct NoiseRule {
    pub category: NoiseCategory,
    /// Lowercase substring to look for.
    pub pattern: &'static str,
    pub scope: MatchScope,
    pub exception: Option<Exception>,
}

impl NoiseRule {
    /// Whether the pattern occurs in the attributes covered by the scope.
    #[must_use]
    pub fn matches(&self, signals: &ElementSignals) -> bool {
        match self.scope {
            MatchScope::ClassOrId => {
                signals.class.contains(self.pattern) || signals.id.contains(self.pattern)
            }
            MatchScope::ClassOnly => signals.class.contains(self.pattern),
        }
    }
}

/// Classify an element against a single rule.
///
/// # Example
///
/// ```rust
/// use webfetch_clean::selector::noise::{classify, ElementSignals, Verdict, BANNER_RULE};
///
/// let ad = ElementSignals::new("ad-banner", "");
/// let header = ElementSignals::new("header-banner", "");
/// assert_eq!(classify(&BANNER_RULE, &ad), Verdict::Remove);
/// assert_eq!(classify(&BANNER_RULE, &header), Verdict::Keep);
/// ```
#[must_use]
pub fn classify(rule: &NoiseRule, signals: &ElementSignals) -> Verdict {
    if !rule.matches(signals) {
        return Verdict::Keep;
    }
    match rule.exception {
        Some(exception) if exception(signals) => Verdict::Keep,
        _ => Verdict::Remove,
    }
}

// === Exceptions ===

/// Banner-styled page headers are content, not ads.
fn is_page_header(signals: &ElementSignals) -> bool {
    signals.class.contains("header")
}

/// In-content menus (e.g. a table of contents inside an article) stay.
fn is_in_content_region(signals: &ElementSignals) -> bool {
    signals.in_content_region
}

// === Rule Tables ===

const fn rule(category: NoiseCategory, pattern: &'static str) -> NoiseRule {
    NoiseRule {
        category,
        pattern,
        scope: MatchScope::ClassOrId,
        exception: None,
    }
}

/// Unconditional removal of anything labelled "advertisement".
pub static ADVERTISEMENT_RULE: NoiseRule = rule(NoiseCategory::Advertisement, "advertisement");

/// Banner removal, except banners whose class also says "header".
pub static BANNER_RULE: NoiseRule = NoiseRule {
    exception: Some(is_page_header),
    ..rule(NoiseCategory::Banner, "banner")
};

/// Chrome/clutter categories, applied in this order after footer/aside removal.
pub static CLUTTER_RULES: &[NoiseRule] = &[
    rule(NoiseCategory::Sidebar, "sidebar"),
    NoiseRule {
        category: NoiseCategory::Menu,
        pattern: "menu",
        scope: MatchScope::ClassOnly,
        exception: Some(is_in_content_region),
    },
    rule(NoiseCategory::Popup, "popup"),
    rule(NoiseCategory::Modal, "modal"),
    rule(NoiseCategory::Cookie, "cookie"),
    rule(NoiseCategory::Social, "social"),
    rule(NoiseCategory::Share, "share"),
    rule(NoiseCategory::Comment, "comment"),
];

// === Ad Rule ===

/// Two-tier ad detection.
///
/// An element is a candidate when its `class` or `id` contains the generic
/// signal; it is removed only when `class + " " + id` also contains one of
/// the precision fragments. A signal-only match ("header", "thread",
/// "download") is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdRule {
    signal: String,
    fragments: Vec<String>,
}

impl AdRule {
    /// Ad rule with a custom fragment list; fragments are lowercased.
    #[must_use]
    pub fn with_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            signal: AD_SIGNAL.to_string(),
            fragments: fragments
                .into_iter()
                .map(|f| dom::lower(f.as_ref()))
                .filter(|f| !f.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// First tier: the generic signal in `class` or `id`.
    #[must_use]
    pub fn has_signal(&self, signals: &ElementSignals) -> bool {
        signals.class.contains(&self.signal) || signals.id.contains(&self.signal)
    }

    #[must_use]
    pub fn classify(&self, signals: &ElementSignals) -> Verdict {
        if !self.has_signal(signals) {
            return Verdict::Keep;
        }
        let combined = signals.combined();
        if self.fragments.iter().any(|f| combined.contains(f.as_str())) {
            Verdict::Remove
        } else {
            Verdict::Keep
        }
    }
}

impl Default for AdRule {
    fn default() -> Self {
        Self::with_fragments(DEFAULT_AD_FRAGMENTS)
    }
}

/// Tunable parts of the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseRules {
    pub ad: AdRule,
}
