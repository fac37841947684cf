/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! # Nadlan Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use nadlan_client::prelude::*;
//!
//! let config = Config::with_base_url("https://api.nadlan.example");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Nadlan API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// REQUEST CLIENT
// ============================================================================

/// Resilient request client and per-call options
pub use crate::client::{ApiClient, RequestOptions};

/// Retry policy and status classification
pub use crate::retry::{RetryPolicy, is_retryable_status};

// ============================================================================
// CREDENTIALS
// ============================================================================

/// Storage seam for the bearer credential
pub use crate::credentials::{CredentialStore, InMemoryCredentialStore};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types for custom requests
pub use reqwest::{Method, StatusCode};
