//! Hard-redirect primitive used by deauthentication.
//!
//! This is deliberately separate from the guard's soft redirect: a forced
//! navigation discards pending route state and in-memory application state,
//! so it never passes through [`crate::NavigationGuard`].

/// Performs a full navigation that bypasses client-side routing.
pub trait Navigator: Send + Sync {
    fn force_navigate(&self, path: &str);
}
