// src/fetch.rs
//! One bounded GET per source. Transport failures are the caller's to
//! log; a non-success status is simply "no data for this source today".

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::sources::Source;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client for every source in a run.
pub fn client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("building http client")
}

/// Fetch the source page. `Ok(None)` means the server answered with a
/// non-success status; errors are transport-level (DNS, timeout, reset).
pub async fn fetch(client: &Client, source: &Source) -> Result<Option<String>> {
    let resp = client
        .get(&source.target)
        .send()
        .await
        .with_context(|| format!("requesting {}", source.target))?;

    if !resp.status().is_success() {
        tracing::debug!(source = source.name, status = %resp.status(), "non-success status");
        return Ok(None);
    }

    let body = resp
        .text()
        .await
        .with_context(|| format!("reading body from {}", source.target))?;
    Ok(Some(body))
}
