//! Navigation guard: gate every route transition on session presence.
//!
//! Evaluation order:
//! 1. whitelisted destination (login) → permitted
//! 2. session token present → permitted
//! 3. otherwise → redirect to login, discarding the requested target
//!
//! The decision is synchronous and never fails. Token presence alone is
//! authoritative; nothing is validated against the server here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::LOGIN_PATH;
use crate::routes::{NavigationTarget, normalize_path};
use crate::store::SessionStore;

/// Outcome of evaluating one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the target as requested.
    Permit,
    /// Soft redirect to this path instead.
    Redirect(String),
}

impl GuardDecision {
    #[must_use]
    pub fn is_permitted(&self) -> bool {
        matches!(self, Self::Permit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationGuard {
    whitelist: Vec<String>,
    login_path: String,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self { whitelist: vec![LOGIN_PATH.to_owned()], login_path: LOGIN_PATH.to_owned() }
    }
}

impl NavigationGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    #[must_use]
    pub fn is_whitelisted(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.whitelist.iter().any(|allowed| *allowed == path)
    }

    /// Decide whether `target` may mount, reading the session from `store`.
    #[must_use]
    pub fn evaluate(&self, target: &NavigationTarget, store: &dyn SessionStore) -> GuardDecision {
        self.decide(&target.path, store.has_token())
    }

    /// Pure form of [`NavigationGuard::evaluate`].
    #[must_use]
    pub fn decide(&self, path: &str, has_token: bool) -> GuardDecision {
        if self.is_whitelisted(path) || has_token {
            GuardDecision::Permit
        } else {
            log::debug!("navigation to {path} gated; redirecting to {}", self.login_path);
            GuardDecision::Redirect(self.login_path.clone())
        }
    }
}
