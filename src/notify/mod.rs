// src/notify/mod.rs
//! Outbound notification: one message per run, formatted here and
//! delivered by a channel-specific adapter.

pub mod telegram;

use anyhow::Result;

use crate::extract::Candidate;

/// Fixed message for runs that found nothing new.
pub const NO_UPDATES_TEXT: &str = "✅ No hay novedades en la oposición hoy.";

const HEADER: &str = "*📢 Nueva actualización sobre la oposición:*\n\n";

/// Messaging seam. The send is the run's single suspension point besides
/// the fetches; failure is a typed result for the orchestrator to log,
/// never an exception crossing the boundary.
#[async_trait::async_trait]
pub trait Notifier {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Compose the run's single message: the fixed no-updates text, or a
/// header plus one block per new announcement.
pub fn compose_message(new: &[Candidate]) -> String {
    if new.is_empty() {
        return NO_UPDATES_TEXT.to_string();
    }
    let mut msg = String::from(HEADER);
    for c in new {
        msg.push_str(&format!(
            "🔹 *{}*\nFuente: {}\n🔗 [Ver más]({})\n\n",
            c.title, c.source, c.link
        ));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_composes_fixed_text() {
        assert_eq!(compose_message(&[]), NO_UPDATES_TEXT);
    }

    #[test]
    fn records_are_listed_with_source_and_link() {
        let new = vec![
            Candidate {
                source: "BOE".into(),
                title: "Convocatoria TIC".into(),
                link: "https://www.boe.es/doc1".into(),
            },
            Candidate {
                source: "INAP".into(),
                title: "2026 - Cuerpo de Gestión".into(),
                link: "https://www.inap.es/gestion".into(),
            },
        ];
        let msg = compose_message(&new);
        assert!(msg.starts_with(HEADER));
        assert!(msg.contains("*Convocatoria TIC*"));
        assert!(msg.contains("Fuente: BOE"));
        assert!(msg.contains("[Ver más](https://www.boe.es/doc1)"));
        assert!(msg.contains("Fuente: INAP"));
    }
}
