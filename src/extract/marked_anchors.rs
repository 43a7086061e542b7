// src/extract/marked_anchors.rs
//! Employment-portal rule.
//!
//! Announcement links all carry one marker class but are scattered
//! through the page rather than grouped in a container, so the rule
//! matches the anchors directly.

use once_cell::sync::OnceCell;
use scraper::{Html, Selector};

use super::{absolutize, element_text, selector, Candidate, Rule, FALLBACK_TITLE};
use crate::sources::Source;

const ANCHOR_CSS: &str = "a.enlace-noticia";

pub struct MarkedAnchors;

impl Rule for MarkedAnchors {
    fn extract(&self, source: &Source, doc: &Html) -> Vec<Candidate> {
        static ANCHOR_SEL: OnceCell<Selector> = OnceCell::new();

        let mut out = Vec::new();
        for a in doc.select(selector(&ANCHOR_SEL, ANCHOR_CSS)) {
            let text = element_text(&a);
            let title = if text.is_empty() {
                FALLBACK_TITLE.to_string()
            } else {
                text
            };
            let link = a
                .value()
                .attr("href")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn portal() -> Source {
        Source {
            name: "Empleo Público",
            target: "https://administracion.gob.es/boletin.html".to_string(),
            rule: "marked-anchors",
        }
    }

    #[test]
    fn only_marked_anchors_are_extracted() {
        let html = r#"
            <a href="/menu">Inicio</a>
            <a class="enlace-noticia" href="/convocatoria-1">Nueva convocatoria TIC</a>
            <a class="enlace-noticia" href="https://boe.es/doc">Corrección de errores</a>"#;
        let out = MarkedAnchors.extract(&portal(), &Html::parse_document(html));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "Nueva convocatoria TIC");
        assert_eq!(out[0].link, "https://administracion.gob.es/convocatoria-1");
        assert_eq!(out[1].link, "https://boe.es/doc");
    }

    #[test]
    fn anchor_without_text_gets_fallback_title() {
        let html = r#"<a class="enlace-noticia" href="/doc"><img src="x.png"></a>"#;
        let out = MarkedAnchors.extract(&portal(), &Html::parse_document(html));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, FALLBACK_TITLE);
    }

    #[test]
    fn anchor_without_href_keeps_source_target() {
        let html = r#"<a class="enlace-noticia">Aviso sin enlace</a>"#;
        let out = MarkedAnchors.extract(&portal(), &Html::parse_document(html));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].link, "https://administracion.gob.es/boletin.html");
    }
}
