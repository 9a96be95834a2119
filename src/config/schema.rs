//! Configuration schema

use crate::fetcher::{FetchSettings, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User configuration loaded from `.policheckrc.json`. Every field is
/// optional; absent fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Minimum acceptable score (exit 1 below this)
    pub threshold: Option<u8>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// User-Agent header for outbound requests
    pub user_agent: Option<String>,
    /// Redirect hop limit
    pub max_redirects: Option<usize>,
}

impl Config {
    /// CLI flags take precedence over config file values.
    pub fn merge_with_cli(mut self, threshold: Option<u8>, timeout_secs: Option<u64>) -> Self {
        if threshold.is_some() {
            self.threshold = threshold;
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    /// Transport settings with defaults filled in.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_redirects: self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS),
        }
    }
}
