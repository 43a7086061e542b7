// src/config.rs
//! Environment-backed configuration, resolved once at startup and passed
//! explicitly to the components that need it.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_DB_PATH: &str = "OPOWATCH_DB_PATH";

pub const DEFAULT_DB_PATH: &str = "oposiciones.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub db_path: PathBuf,
}

impl Config {
    /// Read the full configuration from the process environment.
    ///
    /// Missing or empty credentials are a fatal pre-flight error; the
    /// caller must not touch the store or the network before this
    /// succeeds.
    pub fn from_env() -> Result<Self> {
        let bot_token = require_env(ENV_BOT_TOKEN)?;
        let chat_id = require_env(ENV_CHAT_ID)?;
        Ok(Self {
            bot_token,
            chat_id,
            db_path: db_path_from_env(),
        })
    }
}

/// Database location, shared with the read-only dump utility (which has
/// no use for the Telegram credentials).
pub fn db_path_from_env() -> PathBuf {
    std::env::var(ENV_DB_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH))
}

fn require_env(key: &str) -> Result<String> {
    let val = std::env::var(key).with_context(|| format!("{key} is not set"))?;
    if val.trim().is_empty() {
        bail!("{key} is set but empty");
    }
    Ok(val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_all() {
        std::env::remove_var(ENV_BOT_TOKEN);
        std::env::remove_var(ENV_CHAT_ID);
        std::env::remove_var(ENV_DB_PATH);
    }

    #[test]
    #[serial]
    fn missing_token_is_fatal() {
        clear_all();
        std::env::set_var(ENV_CHAT_ID, "42");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_BOT_TOKEN));
    }

    #[test]
    #[serial]
    fn empty_chat_id_is_fatal() {
        clear_all();
        std::env::set_var(ENV_BOT_TOKEN, "123:abc");
        std::env::set_var(ENV_CHAT_ID, "   ");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn db_path_defaults_and_overrides() {
        clear_all();
        std::env::set_var(ENV_BOT_TOKEN, "123:abc");
        std::env::set_var(ENV_CHAT_ID, "42");

        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.db_path, PathBuf::from(DEFAULT_DB_PATH));

        std::env::set_var(ENV_DB_PATH, "/tmp/other.db");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/other.db"));
        clear_all();
    }
}
