/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Error types for the Nadlan API client
//!
//! Every failed request surfaces as an [`AppError`]. The two variants the
//! request pipeline produces are mutually exclusive: [`AppError::Response`]
//! carries the status and parsed body of a completed HTTP exchange, while
//! [`AppError::Network`] means no response was received at all (connection
//! failure or client-side timeout). Error-handling layers above the client
//! discriminate on that shape to decide severity and user messaging.

use reqwest::StatusCode;
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The server replied with a non-success status (outside 200..300)
    Response {
        /// HTTP status code of the response
        status: StatusCode,
        /// Parsed JSON body; an empty object when the body was not valid JSON
        data: Value,
        /// Message from the body's `message` field, or `HTTP <status>: <reason>`
        message: String,
    },
    /// No response was received: connection failure or client-side timeout
    Network {
        /// Human-readable description of the transport failure
        message: String,
    },
    /// A request body could not be serialized to JSON
    Serialization(String),
    /// A successful response body could not be deserialized into the target type
    Deserialization(String),
    /// Invalid caller input, such as a malformed header name
    InvalidInput(String),
}

impl AppError {
    /// HTTP status of the failure, if a response was received
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Status and parsed body of the failure, if a response was received
    #[must_use]
    pub fn response(&self) -> Option<(StatusCode, &Value)> {
        match self {
            AppError::Response { status, data, .. } => Some((*status, data)),
            _ => None,
        }
    }

    /// Whether the request client should attempt this failure again
    ///
    /// Application failures are non-retryable for statuses in 400..500 except
    /// 408 and 429; network-class failures are always retryable. Failures that
    /// happen outside the network exchange (serialization, deserialization,
    /// invalid input) are never retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Response { status, .. } => crate::retry::is_retryable_status(*status),
            AppError::Network { .. } => true,
            AppError::Serialization(_)
            | AppError::Deserialization(_)
            | AppError::InvalidInput(_) => false,
        }
    }

    /// Builds the application-failure variant from a completed exchange
    ///
    /// The message comes from the body's `message` field when present,
    /// otherwise from the status line.
    #[must_use]
    pub fn from_response(status: StatusCode, data: Value) -> Self {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });
        AppError::Response {
            status,
            data,
            message,
        }
    }

    /// Builds the timeout flavor of the network-class variant
    #[must_use]
    pub fn timeout(timeout: Duration) -> Self {
        AppError::Network {
            message: format!("request timed out after {}ms", timeout.as_millis()),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Response {
                status, message, ..
            } => write!(f, "http {}: {}", status.as_u16(), message),
            AppError::Network { message } => write!(f, "network error: {message}"),
            AppError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Deserialization(error.to_string())
    }
}
