//! Per-call request context and its builder.
//!
//! DESIGN
//! ======
//! Builder steps that can fail (body serialization, header validation) record
//! the first error instead of returning it, so construction failures surface
//! inside the pipeline's dispatch stage where the progress indicator is
//! already bracketing the call.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
}

impl Body {
    /// Content type implied by this body, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }

    /// Wire encoding of the body.
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Json(value) => Some(value.to_string()),
            Self::Form(pairs) => Some(
                url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                    .finish(),
            ),
        }
    }
}

/// A fully built call, owned by the pipeline until the transport consumes it.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub method: Method,
    /// Endpoint path relative to the API base (`/admin/product/`).
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Absolute or same-origin URL, resolved by the dispatch stage.
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Body,
    /// Deadline applied by the transport.
    pub timeout: Option<Duration>,
}

impl RequestContext {
    #[must_use]
    pub fn builder(method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, path)
    }

    /// Header value lookup, case-insensitive on the name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing entry regardless of case.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_owned(), value);
    }
}

/// Accumulates a [`RequestContext`]; the first failing step wins.
#[derive(Debug)]
pub struct RequestBuilder {
    inner: Result<RequestContext, ApiError>,
}

impl RequestBuilder {
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        let inner = if path.trim().is_empty() {
            Err(ApiError::Malformed("empty request path".to_owned()))
        } else {
            Ok(RequestContext {
                method,
                path: path.to_owned(),
                query: Vec::new(),
                url: String::new(),
                headers: BTreeMap::new(),
                body: Body::Empty,
                timeout: None,
            })
        };
        Self { inner }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Serialize `body` as JSON.
    #[must_use]
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Self {
        self.and_then(|mut ctx| {
            let value = serde_json::to_value(body).map_err(|e| ApiError::Malformed(format!("json body: {e}")))?;
            ctx.body = Body::Json(value);
            Ok(ctx)
        })
    }

    /// Send `pairs` as a urlencoded form.
    #[must_use]
    pub fn form(self, pairs: &[(&str, &str)]) -> Self {
        self.map(|mut ctx| {
            ctx.body = Body::Form(pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect());
            ctx
        })
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        self.map(|mut ctx| {
            ctx.query.push((key.to_owned(), value));
            ctx
        })
    }

    /// Append a query parameter only when `value` is present.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Set a header. Names must be tokens and values must not contain
    /// control characters.
    #[must_use]
    pub fn header(self, name: &str, value: &str) -> Self {
        self.and_then(|mut ctx| {
            validate_header(name, value)?;
            ctx.set_header(name, value.to_owned());
            Ok(ctx)
        })
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError::Malformed`] recorded by a builder step.
    pub fn build(self) -> Result<RequestContext, ApiError> {
        self.inner
    }

    fn map(self, f: impl FnOnce(RequestContext) -> RequestContext) -> Self {
        Self { inner: self.inner.map(f) }
    }

    fn and_then(self, f: impl FnOnce(RequestContext) -> Result<RequestContext, ApiError>) -> Self {
        Self { inner: self.inner.and_then(f) }
    }
}

/// Reject header names/values that no HTTP client would put on the wire.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] for an invalid name or value.
pub fn validate_header(name: &str, value: &str) -> Result<(), ApiError> {
    let name_ok = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b));
    if !name_ok {
        return Err(ApiError::Malformed(format!("invalid header name `{name}`")));
    }
    if value.chars().any(|c| c.is_control() && c != '\t') {
        return Err(ApiError::Malformed(format!("invalid value for header `{name}`")));
    }
    Ok(())
}

/// What a transport hands back: the status and the decoded JSON body
/// (`null` when the body is empty).
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parse a raw response body: empty becomes `null`, non-JSON text is kept
/// as a JSON string.
#[must_use]
pub fn parse_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}
