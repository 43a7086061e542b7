// src/extract/gazette.rs
//! BOE daily-summary rule.
//!
//! The summary page lists one `<li>` per disposition, with the
//! disposition text in a nested paragraph and the document formats in a
//! trailing link container. Document hrefs are root-relative.

use once_cell::sync::OnceCell;
use scraper::{Html, Selector};

use super::{absolutize, element_text, selector, Candidate, Rule, FALLBACK_TITLE};
use crate::sources::Source;

const ITEM_CSS: &str = "li.dispo";
const TITLE_CSS: &str = "p";
const LINK_CSS: &str = "div.enlaces a";

pub struct Gazette;

impl Rule for Gazette {
    fn extract(&self, source: &Source, doc: &Html) -> Vec<Candidate> {
        static ITEM_SEL: OnceCell<Selector> = OnceCell::new();
        static TITLE_SEL: OnceCell<Selector> = OnceCell::new();
        static LINK_SEL: OnceCell<Selector> = OnceCell::new();

        let mut out = Vec::new();
        for item in doc.select(selector(&ITEM_SEL, ITEM_CSS)) {
            let title = item
                .select(selector(&TITLE_SEL, TITLE_CSS))
                .next()
                .map(|p| element_text(&p))
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_TITLE.to_string());

            let link = item
                .select(selector(&LINK_SEL, LINK_CSS))
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| absolutize(source, href))
                .unwrap_or_else(|| source.target.clone());

            out.push(Candidate {
                source: source.name.to_string(),
                title,
                link,
            });
        }
        out
    }
}
