//! Session token store contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pipeline reads the token on every dispatch and clears it on `401`; the
//! guard reads it on every navigation. Absence of the token is the only
//! "not authenticated" signal, so implementations must be synchronous and
//! durable (browser `localStorage`, a token file for the CLI).

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Mutex;

/// Well-known key the token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Synchronous get/set/clear access to the single session token.
pub trait SessionStore: Send + Sync {
    /// Current token, if one is stored.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);

    /// Whether a usable token is present. Empty values count as absent.
    fn has_token(&self) -> bool {
        self.get().is_some_and(|token| !token.trim().is_empty())
    }
}

/// Process-local store, used where no durable backend exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().map(|slot| slot.clone()).unwrap_or(None)
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
