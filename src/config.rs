//! Runtime configuration read from the environment (and `.env`).

use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILTER: &str = "ap_typing=info,tower_http=info";

/// Configuration shared by the CLI, the HTTP server and the chat bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub server_addr: String,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Only the chat bot needs this
    pub telegram_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            telegram_token: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read `AP_SERVER_ADDR`, `AP_LOG` and `TELEGRAM_BOT_TOKEN`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server_addr: lookup("AP_SERVER_ADDR").unwrap_or(defaults.server_addr),
            log_filter: lookup("AP_LOG").unwrap_or(defaults.log_filter),
            telegram_token: lookup("TELEGRAM_BOT_TOKEN").filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn require_telegram_token(&self) -> Result<&str> {
        self.telegram_token
            .as_deref()
            .ok_or_else(|| anyhow!("TELEGRAM_BOT_TOKEN is not set; add it to the environment or .env"))
    }
}
