//! `reqwest` transport and the terminal's stand-in for a hard redirect.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use gate::request::parse_body;
use gate::{Method, Navigator, RequestContext, Response, Transport, TransportError};
use reqwest::header::CONTENT_TYPE;

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("hexauth-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestContext) -> Result<Response, TransportError> {
        let mut builder = self.client.request(to_reqwest(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let (Some(content_type), None) = (request.body.content_type(), request.header("Content-Type")) {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.body.encode() {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;
        Ok(Response::new(status, parse_body(&text)))
    }
}

/// There is no page to reload; tell the operator how to get a new session.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNavigator;

pub const LOGIN_HINT: &str = "session expired or rejected; run `hexauth-cli login`";

impl Navigator for TerminalNavigator {
    fn force_navigate(&self, path: &str) {
        tracing::debug!(path, "deauthenticated");
        eprintln!("{LOGIN_HINT}");
    }
}
