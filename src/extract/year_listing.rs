// src/extract/year_listing.rs
//! INAP listing rule.
//!
//! Convocatorias are grouped under one heading per year, each heading
//! followed by a plain list of links. Headings without a year label
//! (section titles, navigation) are ignored, as is a heading whose next
//! element is not a list.

use once_cell::sync::OnceCell;
use scraper::{ElementRef, Html, Selector};

use super::{absolutize, element_text, selector, Candidate, Rule};
use crate::sources::Source;

const HEADING_CSS: &str = "h3";
const ANCHOR_CSS: &str = "a";

pub struct YearListing;

impl Rule for YearListing {
    fn extract(&self, source: &Source, doc: &Html) -> Vec<Candidate> {
        static HEADING_SEL: OnceCell<Selector> = OnceCell::new();
        static ANCHOR_SEL: OnceCell<Selector> = OnceCell::new();

        let mut out = Vec::new();
        for heading in doc.select(selector(&HEADING_SEL, HEADING_CSS)) {
            let heading_text = element_text(&heading);
            let Some(year) = year_label(&heading_text) else {
                continue;
            };
            let Some(list) = following_list(&heading) else {
                continue;
            };
            for a in list.select(selector(&ANCHOR_SEL, ANCHOR_CSS)) {
                let text = element_text(&a);
                if text.is_empty() {
                    continue;
                }
                let link = a
                    .value()
                    .attr("href")
                    .map(|href| absolutize(source, href))
                    .unwrap_or_else(|| source.target.clone());
                out.push(Candidate {
                    source: source.name.to_string(),
                    title: format!("{year} - {text}"),
                    link,
                });
            }
        }
        out
    }
}

fn year_label(text: &str) -> Option<&str> {
    static RE_YEAR: OnceCell<regex::Regex> = OnceCell::new();
    let re = RE_YEAR.get_or_init(|| regex::Regex::new(r"\b(19|20)\d{2}\b").unwrap());
    re.find(text).map(|m| m.as_str())
}

/// First element sibling after the heading, if it is a list.
fn following_list<'a>(heading: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "ul" | "ol"))
}
