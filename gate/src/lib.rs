//! Session-gated access control shared by the console front ends.
//!
//! This crate owns the pieces every front end must agree on: the session
//! token contract, the two-stage request pipeline that attaches credentials
//! and reacts to `401`, the navigation guard over the console route table,
//! and the typed admin API that rides on top of the pipeline.
//!
//! Browser and terminal specifics (storage backend, HTTP client, how a hard
//! redirect is performed) plug in through the [`SessionStore`],
//! [`Transport`], [`ProgressIndicator`], and [`Navigator`] traits.

pub mod admin;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigate;
pub mod pipeline;
pub mod progress;
pub mod request;
pub mod routes;
pub mod store;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use guard::{GuardDecision, NavigationGuard};
pub use navigate::Navigator;
pub use pipeline::Pipeline;
pub use progress::{ProgressCounter, ProgressGuard, ProgressIndicator};
pub use request::{Body, Method, RequestBuilder, RequestContext, Response};
pub use routes::{NavigationTarget, RouteRecord, RouteTable};
pub use store::{MemoryStore, SessionStore, TOKEN_KEY};
pub use transport::{Transport, TransportError};

/// Path of the only view reachable without a session.
pub const LOGIN_PATH: &str = "/login";

/// Header carrying the session credential on outbound calls.
pub const AUTHORIZATION: &str = "Authorization";

/// Format a session token as an `Authorization` header value.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
