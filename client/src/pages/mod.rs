//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch state and row actions and calls the backend only
//! through the [`crate::app::Console`] context, so every request rides the
//! gate pipeline.

pub mod audit_logs;
pub mod clients;
pub mod dashboard;
pub mod licenses;
pub mod login;
pub mod products;
