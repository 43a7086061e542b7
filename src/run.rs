// src/run.rs
//! One fetch → extract → dedup → notify cycle.

use anyhow::Result;
use reqwest::Client;
use tracing::{info, warn};

use crate::extract::{self, Candidate};
use crate::fetch;
use crate::notify::{compose_message, Notifier};
use crate::sources::Source;
use crate::store::SeenStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates: usize,
    pub new: usize,
    pub notified: bool,
}

/// Fetch every source and extract its candidates, registry order. A
/// failed or empty fetch costs only that source's records.
pub async fn collect_candidates(client: &Client, sources: &[Source]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for source in sources {
        match fetch::fetch(client, source).await {
            Ok(Some(body)) => {
                let mut records = extract::extract(source, &body);
                info!(source = source.name, records = records.len(), "extracted");
                candidates.append(&mut records);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(source = source.name, error = ?e, "fetch failed");
            }
        }
    }
    candidates
}

/// Run one complete cycle. Only store I/O errors propagate; fetch and
/// delivery failures are logged and absorbed.
pub async fn run_once(
    client: &Client,
    sources: &[Source],
    store: &mut SeenStore,
    notifier: &dyn Notifier,
) -> Result<RunSummary> {
    let candidates = collect_candidates(client, sources).await;
    let new = store.partition_and_record(&candidates)?;
    info!(candidates = candidates.len(), new = new.len(), "partitioned");

    let message = compose_message(&new);
    let notified = match notifier.send(&message).await {
        Ok(()) => true,
        Err(e) => {
            // The new records are already durably recorded; losing the
            // notification must not make them reappear next run.
            warn!(error = ?e, "notification delivery failed");
            false
        }
    };

    Ok(RunSummary {
        candidates: candidates.len(),
        new: new.len(),
        notified,
    })
}
