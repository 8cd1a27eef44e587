//! Browser `fetch` transport for the request pipeline.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against the
//! per-call deadline; the underlying fetch is aborted when the deadline wins.
//! Native builds (tests): every send fails with a transport error, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The transport never classifies statuses. Any response that arrives is
//! handed back as-is so the pipeline can apply its `401` policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use gate::{RequestContext, Response, Transport, TransportError};

/// `fetch`-backed [`Transport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: RequestContext) -> Result<Response, TransportError> {
        #[cfg(feature = "csr")]
        {
            fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable() -> TransportError {
    TransportError::Network("fetch is only available in the browser".to_owned())
}

#[cfg(any(test, feature = "csr"))]
fn network_error(err: impl std::fmt::Display) -> TransportError {
    TransportError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn fetch(request: RequestContext) -> Result<Response, TransportError> {
    use futures::future::{Either, select};
    use gloo_net::http::{Method, RequestBuilder};

    let method = match request.method {
        gate::Method::Get => Method::GET,
        gate::Method::Post => Method::POST,
        gate::Method::Put => Method::PUT,
        gate::Method::Patch => Method::PATCH,
        gate::Method::Delete => Method::DELETE,
    };

    let abort = web_sys::AbortController::new().ok();
    let mut builder = RequestBuilder::new(&request.url)
        .method(method)
        .abort_signal(abort.as_ref().map(web_sys::AbortController::signal).as_ref());
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if let (Some(content_type), None) = (request.body.content_type(), request.header("Content-Type")) {
        builder = builder.header("Content-Type", content_type);
    }
    let prepared = match request.body.encode() {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(network_error)?;

    let timeout = request
        .timeout
        .unwrap_or_else(|| std::time::Duration::from_millis(gate::config::DEFAULT_TIMEOUT_MS));
    let send = Box::pin(prepared.send());
    let deadline = Box::pin(gloo_timers::future::sleep(timeout));
    let response = match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(network_error)?,
        Either::Right(((), _)) => {
            if let Some(controller) = abort {
                controller.abort();
            }
            return Err(TransportError::Timeout);
        }
    };

    let status = response.status();
    let text = response.text().await.map_err(network_error)?;
    Ok(Response::new(status, gate::request::parse_body(&text)))
}
