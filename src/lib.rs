/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # Nadlan API Client
//!
//! Resilient HTTP client for the Nadlan AI platform REST API.
//!
//! The crate is built around a single component, [`client::ApiClient`],
//! which performs one logical HTTP operation with:
//! - a per-attempt timeout raced against the network call
//! - bounded retries with exponential backoff for transient failures
//! - error classification deciding which failures are worth retrying
//! - automatic bearer-credential injection from a pluggable store
//! - a single normalized error shape ([`error::AppError`]) for all failures
//!
//! # Example
//! ```ignore
//! use nadlan_client::prelude::*;
//!
//! let config = Config::new();
//! let client = ApiClient::new(config)?;
//!
//! let listings: serde_json::Value = client.get("/api/listings").await?;
//! ```

/// Resilient request client and per-call options
pub mod client;
/// Configuration loaded from environment variables and .env files
pub mod config;
/// Global constants and defaults
pub mod constants;
/// Pluggable storage for the bearer credential
pub mod credentials;
/// Error types and the normalized failure contract
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// Retry policy and backoff computation
pub mod retry;
/// Utility modules
pub mod utils;

/// Library version, taken from Cargo.toml at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
