//! HTTP client seam.
//!
//! Transports only move bytes: they enforce the context's deadline and hand
//! back whatever status arrived. Status classification, credentials, and
//! deauthentication all live in [`crate::Pipeline`].

use async_trait::async_trait;

use crate::request::{RequestContext, Response};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The per-call deadline elapsed before a response arrived.
    #[error("timed out")]
    Timeout,
    /// Connection, DNS, CORS, or body read failure.
    #[error("{0}")]
    Network(String),
}

/// Sends a prepared request.
///
/// Futures are not required to be `Send`; browser fetch futures are not.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: RequestContext) -> Result<Response, TransportError>;
}
