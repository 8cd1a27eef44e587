//! Two-stage request pipeline wrapping every outbound call.
//!
//! ARCHITECTURE
//! ============
//! `dispatch` runs before the call leaves the process: it builds the context,
//! resolves the URL against the configured base, applies the deadline, and
//! attaches `Authorization: Bearer <token>` when a session exists.
//!
//! `respond` runs after the transport resolves or fails: it releases the
//! progress indicator first, unwraps the body on success, and on `401` clears
//! the session and forces a hard navigation to the login view. Every failure
//! is re-raised to the caller after those side effects.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::navigate::Navigator;
use crate::progress::{ProgressGuard, ProgressIndicator};
use crate::request::{RequestBuilder, RequestContext, Response, validate_header};
use crate::store::SessionStore;
use crate::transport::{Transport, TransportError};
use crate::{AUTHORIZATION, bearer};

/// Shared collaborators plus a transport. Construct once per process.
pub struct Pipeline<T> {
    transport: T,
    store: Arc<dyn SessionStore>,
    progress: Arc<dyn ProgressIndicator>,
    navigator: Arc<dyn Navigator>,
    config: ApiConfig,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(
        transport: T,
        store: Arc<dyn SessionStore>,
        progress: Arc<dyn ProgressIndicator>,
        navigator: Arc<dyn Navigator>,
        config: ApiConfig,
    ) -> Self {
        Self { transport, store, progress, navigator, config }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one call through both stages and return the response body.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] for a malformed request, a transport failure,
    /// or any non-success status. A `401` has already deauthenticated the
    /// session by the time the error is returned.
    pub async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let progress = ProgressGuard::begin(self.progress.as_ref());
        let context = match self.dispatch(request) {
            Ok(context) => context,
            Err(err) => {
                drop(progress);
                log::debug!("request not dispatched: {err}");
                return Err(err);
            }
        };
        let outcome = self.transport.send(context).await;
        self.respond(progress, outcome)
    }

    /// [`Pipeline::send`], then decode the body into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `R`, plus
    /// every error [`Pipeline::send`] can return.
    pub async fn send_as<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(ApiError::from)
    }

    /// Dispatch stage: build the context and attach the session credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Malformed`] when the request cannot be built.
    pub fn dispatch(&self, request: RequestBuilder) -> Result<RequestContext, ApiError> {
        let mut context = request.build()?;
        context.url = self.config.url_for(&context.path, &context.query);
        context.timeout = Some(self.config.timeout);

        let token = self.store.get().filter(|token| !token.trim().is_empty());
        if let Some(token) = &token {
            let value = bearer(token);
            validate_header(AUTHORIZATION, &value)?;
            context.set_header(AUTHORIZATION, value);
        }
        log::debug!("{} {} (credential: {})", context.method, context.url, token.is_some());
        Ok(context)
    }

    fn respond(&self, progress: ProgressGuard<'_>, outcome: Result<Response, TransportError>) -> Result<Value, ApiError> {
        drop(progress);

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                log::warn!("request failed without a response: {err}");
                return Err(err.into());
            }
        };
        log::debug!("response status {}", response.status);
        if response.is_success() {
            return Ok(response.body);
        }

        let err = ApiError::from_status(response.status, response.body);
        if err.is_unauthorized() {
            self.deauthenticate();
        }
        Err(err)
    }

    /// Clear the session and hard-navigate to the login view.
    pub fn deauthenticate(&self) {
        log::warn!("session rejected; clearing token and redirecting to {}", self.config.login_path);
        self.store.clear();
        self.navigator.force_navigate(&self.config.login_path);
    }
}
