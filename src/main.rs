//! opowatch — Binary Entrypoint
//! One-shot watcher: fetches each configured source, records unseen
//! announcements, pushes a single Telegram message, and exits.
//! Scheduling (and mutual exclusion between runs) lives outside, e.g.
//! in cron.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use opowatch::config::Config;
use opowatch::notify::telegram::TelegramNotifier;
use opowatch::store::SeenStore;
use opowatch::{fetch, run, sources};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when the scheduler provides the vars.
    let _ = dotenvy::dotenv();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("opowatch=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // Credentials are checked before any fetch/store/notify activity.
    let cfg = Config::from_env()?;

    let today = chrono::Local::now().date_naive();
    let sources = sources::registry(today);

    let mut store = SeenStore::open(&cfg.db_path)?;
    let notifier = TelegramNotifier::new(cfg.bot_token.clone(), cfg.chat_id.clone());
    let client = fetch::client()?;

    let summary = run::run_once(&client, &sources, &mut store, &notifier).await?;
    tracing::info!(
        candidates = summary.candidates,
        new = summary.new,
        notified = summary.notified,
        "run complete"
    );
    Ok(())
}
