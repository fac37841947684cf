/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Retry policy for HTTP requests
//!
//! The policy is pure exponential backoff without jitter: the delay before
//! re-attempt `n` is `backoff_base_ms * 2^n`. Which failures are worth
//! retrying is decided by [`is_retryable_status`] together with
//! [`crate::error::AppError::is_retryable`].

use crate::constants::{BACKOFF_BASE_MS, DEFAULT_MAX_RETRIES};
use crate::utils::config::get_env_or_none;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for HTTP request retry behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt (None = default 3)
    pub max_retry_count: Option<u32>,
    /// Base backoff delay in milliseconds (None = use default 1000)
    pub backoff_base_ms: Option<u64>,
}

impl RetryPolicy {
    /// Creates a new retry policy with default retries and backoff
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new retry policy with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            backoff_base_ms: None, // use default 1000 ms
        }
    }

    /// Creates a new retry policy with a custom backoff base
    #[must_use]
    pub fn with_backoff_base(backoff_base_ms: u64) -> Self {
        Self {
            max_retry_count: None, // use default 3 retries
            backoff_base_ms: Some(backoff_base_ms),
        }
    }

    /// Creates a new retry policy with both max retries and backoff base
    #[must_use]
    pub fn with_max_retries_and_backoff(max_retries: u32, backoff_base_ms: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            backoff_base_ms: Some(backoff_base_ms),
        }
    }

    /// Gets the maximum retry count (default: 3)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Gets the backoff base in milliseconds (default: 1000)
    #[must_use]
    pub fn backoff_base(&self) -> u64 {
        self.backoff_base_ms.unwrap_or(BACKOFF_BASE_MS)
    }

    /// Delay to wait before re-attempt `attempt` (zero-based)
    ///
    /// `backoff_delay(0)` is the delay after the first failed attempt.
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        Duration::from_millis(self.backoff_base().saturating_mul(factor))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        let max_retry_count: Option<u32> = get_env_or_none("MAX_RETRY_COUNT");
        let backoff_base_ms: Option<u64> = get_env_or_none("BACKOFF_BASE_MS");

        Self {
            max_retry_count,
            backoff_base_ms,
        }
    }
}

/// Whether a completed exchange with this status is worth retrying
///
/// Client errors (400..500) are terminal except 408 Request Timeout and
/// 429 Too Many Requests; server errors and everything else are retryable.
#[must_use]
pub fn is_retryable_status(status: StatusCode) -> bool {
    if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }
    !status.is_client_error()
}
