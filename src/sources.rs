// src/sources.rs
//! Static registry of monitored sources.
//!
//! Each entry pairs an official page with the identifier of the
//! extraction rule that understands its markup. Entries are enumerated
//! in order; only the BOE daily summary is date-parameterized.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Unique human-readable identifier, also stored with each record.
    pub name: &'static str,
    /// Fetch target.
    pub target: String,
    /// Extraction rule identifier, resolved by `extract::rule_for`.
    pub rule: &'static str,
}

/// Ordered source registry for one run. `today` fixes the gazette
/// target, so runs started just before midnight stay self-consistent.
pub fn registry(today: NaiveDate) -> Vec<Source> {
    vec![
        Source {
            name: "BOE",
            target: format!(
                "https://www.boe.es/boe/dias/{:04}/{:02}/{:02}/",
                today.year(),
                today.month(),
                today.day()
            ),
            rule: "gazette",
        },
        Source {
            name: "Ministerio de Hacienda",
            target: "https://www.hacienda.gob.es/es-ES/Empleo%20Publico/Paginas/EmpleoPublico.aspx"
                .to_string(),
            rule: "offer-table",
        },
        Source {
            name: "INAP",
            target: "https://www.inap.es/oposiciones".to_string(),
            rule: "year-listing",
        },
        Source {
            name: "Empleo Público",
            target: "https://administracion.gob.es/pag_Home/empleoBecas/empleo/boletinEmpleoPublico.html"
                .to_string(),
            rule: "marked-anchors",
        },
    ]
}
