// src/extract/offer_table.rs
//! Hacienda employment-offer table rule.
//!
//! One selection process per body row of the first table, identified by
//! its first three columns (process title, group, offer reference). The
//! page opens documents through scripted popups, so records keep the
//! page URL itself as link.

use once_cell::sync::OnceCell;
use scraper::{Html, Selector};

use super::{element_text, selector, Candidate, Rule};
use crate::sources::Source;

const TABLE_CSS: &str = "table";
const ROW_CSS: &str = "tbody tr";
const CELL_CSS: &str = "td";

pub struct OfferTable;

impl Rule for OfferTable {
    fn extract(&self, source: &Source, doc: &Html) -> Vec<Candidate> {
        static TABLE_SEL: OnceCell<Selector> = OnceCell::new();
        static ROW_SEL: OnceCell<Selector> = OnceCell::new();
        static CELL_SEL: OnceCell<Selector> = OnceCell::new();

        let Some(table) = doc.select(selector(&TABLE_SEL, TABLE_CSS)).next() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for row in table.select(selector(&ROW_SEL, ROW_CSS)) {
            let cells: Vec<String> = row
                .select(selector(&CELL_SEL, CELL_CSS))
                .map(|c| element_text(&c))
                .collect();
            // Header and separator rows carry fewer cells.
            if cells.len() < 3 {
                continue;
            }
            out.push(Candidate {
                source: source.name.to_string(),
                title: format!("{} (Grupo {}) - OEP {}", cells[0], cells[1], cells[2]),
                link: source.target.clone(),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hacienda() -> Source {
        Source {
            name: "Ministerio de Hacienda",
            target: "https://www.hacienda.gob.es/empleo".to_string(),
            rule: "offer-table",
        }
    }

    #[test]
    fn rows_become_synthetic_titles() {
        let html = r#"
            <table>
              <tbody>
                <tr><td>Cuerpo Superior de Sistemas</td><td>A1</td><td>OEP 2026</td><td>Abierto</td></tr>
                <tr><td>Cuerpo de Gestión</td><td>A2</td><td>OEP 2025</td></tr>
              </tbody>
            </table>"#;
        let out = OfferTable.extract(&hacienda(), &Html::parse_document(html));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "Cuerpo Superior de Sistemas (Grupo A1) - OEP 2026");
        assert_eq!(out[0].link, "https://www.hacienda.gob.es/empleo");
    }

    #[test]
    fn short_rows_are_skipped() {
        let html = r#"
            <table>
              <tbody>
                <tr><td colspan="3">Sin convocatorias abiertas</td></tr>
                <tr><td>Cuerpo TIC</td><td>A1</td><td>OEP 2026</td></tr>
              </tbody>
            </table>"#;
        let out = OfferTable.extract(&hacienda(), &Html::parse_document(html));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Cuerpo TIC (Grupo A1) - OEP 2026");
    }

    #[test]
    fn page_without_table_yields_nothing() {
        let out = OfferTable.extract(&hacienda(), &Html::parse_document("<p>mantenimiento</p>"));
        assert!(out.is_empty());
    }
}
