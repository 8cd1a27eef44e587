//! Error taxonomy for calls made through the request pipeline.
//!
//! Every failure is forwarded to the caller. The pipeline only attaches side
//! effects (indicator release, deauthentication) before re-raising.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::transport::TransportError;

/// Failure of a single pipeline call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built; nothing was sent.
    #[error("malformed request: {0}")]
    Malformed(String),
    /// The server answered `401`. The session has already been cleared.
    #[error("unauthorized")]
    Unauthorized { body: Value },
    /// The server answered with any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },
    /// No response arrived before the per-call deadline.
    #[error("request timed out")]
    Timeout,
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status attached to this failure, if the server responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Malformed(_) | Self::Timeout | Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Server-provided `detail` message (`{"detail": "..."}`), when present.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { body } | Self::Status { body, .. } => body.get("detail").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Message suitable for inline display next to a form or table.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.detail().map_or_else(|| self.to_string(), str::to_owned)
    }

    /// Classify a non-success status into its error variant.
    #[must_use]
    pub fn from_status(status: u16, body: Value) -> Self {
        if status == 401 {
            Self::Unauthorized { body }
        } else {
            Self::Status { status, body }
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => Self::Timeout,
            TransportError::Network(message) => Self::Transport(message),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
