/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Configuration for the Nadlan API client
//!
//! Loaded once at startup from environment variables (with `.env` support)
//! and passed explicitly to [`crate::client::ApiClient`]; the client itself
//! never reads the environment.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::retry::RetryPolicy;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Nadlan API client
pub struct Config {
    /// Base URL for the Nadlan platform REST API
    pub base_url: String,
    /// Default per-attempt timeout in milliseconds
    pub timeout_ms: u64,
    /// Retry policy applied when a call does not override it
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Reads `NADLAN_API_BASE_URL`, `NADLAN_HTTP_TIMEOUT_MS`,
    /// `MAX_RETRY_COUNT` and `BACKOFF_BASE_MS`.
    #[must_use]
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("NADLAN_API_BASE_URL", String::from(DEFAULT_BASE_URL));
        let timeout_ms = get_env_or_default("NADLAN_HTTP_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);

        if base_url == DEFAULT_BASE_URL {
            warn!(
                "NADLAN_API_BASE_URL not found in environment variables or .env file, using {DEFAULT_BASE_URL}"
            );
        }

        Self {
            base_url,
            timeout_ms,
            retry: RetryPolicy::default(),
        }
    }

    /// Creates a configuration with an explicit base URL and built-in defaults
    ///
    /// Useful for tests and for embedders that source the base URL from
    /// their own configuration layer.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryPolicy::new(),
        }
    }
}
