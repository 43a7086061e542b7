// src/extract/mod.rs
//! Per-source extraction rules.
//!
//! Each monitored page has its own hand-tuned rule keyed by the
//! identifier in the source registry. Rules are isolated from each
//! other: a markup change on one site can only reduce that site's
//! output, never crash the run or disturb another rule. Selector
//! strings track the current shape of each page and are expected to
//! need occasional retuning.

pub mod gazette;
pub mod marked_anchors;
pub mod offer_table;
pub mod year_listing;

use once_cell::sync::OnceCell;
use scraper::{Html, Selector};
use url::Url;

use crate::sources::Source;

/// Substituted when a rule cannot form a specific title. Titles are the
/// dedup key, so an empty title must never be emitted.
pub const FALLBACK_TITLE: &str = "no title";

/// One announcement extracted from a fetched document, not yet checked
/// against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub source: String,
    pub title: String,
    pub link: String,
}

/// A source-specific extraction rule. Implementations never fail: a
/// structural mismatch degrades to fallback values or fewer records.
pub trait Rule: Send + Sync {
    fn extract(&self, source: &Source, doc: &Html) -> Vec<Candidate>;
}

pub fn rule_for(id: &str) -> Option<&'static dyn Rule> {
    match id {
        "gazette" => Some(&gazette::Gazette),
        "offer-table" => Some(&offer_table::OfferTable),
        "year-listing" => Some(&year_listing::YearListing),
        "marked-anchors" => Some(&marked_anchors::MarkedAnchors),
        _ => None,
    }
}

/// Parse the fetched document and apply the rule registered for the
/// source. An unknown rule identifier yields zero records.
pub fn extract(source: &Source, html: &str) -> Vec<Candidate> {
    let Some(rule) = rule_for(source.rule) else {
        tracing::warn!(source = source.name, rule = source.rule, "no extraction rule registered");
        return Vec::new();
    };
    let doc = Html::parse_document(html);
    rule.extract(source, &doc)
}

/// Collapse whitespace runs and trim. Layout whitespace inside element
/// text would otherwise make equal titles compare unequal.
pub fn normalize_text(s: &str) -> String {
    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    re_ws.replace_all(s, " ").trim().to_string()
}

/// Resolve an href against the source page: root-relative links get the
/// site origin prefixed, absolute links pass through unchanged, and
/// anything unresolvable falls back to the source target.
pub fn absolutize(source: &Source, href: &str) -> String {
    match Url::parse(&source.target) {
        Ok(base) => base
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| source.target.clone()),
        Err(_) => source.target.clone(),
    }
}

/// Cached compiled selector. The strings are compile-time constants, so
/// a parse failure is a programming error.
pub(crate) fn selector(cell: &'static OnceCell<Selector>, css: &'static str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("valid selector"))
}

/// Visible text of an element, normalized.
pub(crate) fn element_text(el: &scraper::ElementRef<'_>) -> String {
    normalize_text(&el.text().collect::<String>())
}
