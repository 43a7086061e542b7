// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod run;
pub mod sources;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::extract::Candidate;
pub use crate::notify::{compose_message, Notifier};
pub use crate::run::{run_once, RunSummary};
pub use crate::sources::Source;
pub use crate::store::SeenStore;
