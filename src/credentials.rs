/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Pluggable storage for the bearer credential
//!
//! The client reads the stored token at the start of every authenticated
//! call; it never writes it. Setting the token after login and clearing it
//! on logout or on an authentication failure is the caller's job. The
//! storage medium is deliberately not prescribed: embedders implement
//! [`CredentialStore`] over whatever persistence fits their runtime, and
//! tests use [`InMemoryCredentialStore`]. Persistent implementations should
//! hold the token under the well-known key
//! [`crate::constants::ACCESS_TOKEN_KEY`], so that all platform clients
//! agree on where the credential lives.

use std::sync::RwLock;

/// Storage seam for the bearer token used on authenticated calls
///
/// At most one token is held at a time; `None` means unauthenticated.
/// Implementations must be safe to read concurrently from many in-flight
/// requests.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored token, if any
    fn get(&self) -> Option<String>;
    /// Replaces the stored token
    fn set(&self, token: &str);
    /// Removes the stored token
    fn clear(&self);
}

/// Thread-safe in-memory credential store
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store (unauthenticated)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a token
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: &str) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}
