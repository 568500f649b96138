//! Error type shared by every API call.
//!
//! The backend reports failures as `{"detail": "..."}` bodies (FastAPI
//! convention). Those messages are surfaced verbatim so views can show them
//! inline; transport failures get a generic wrapper. A 401 is split out into
//! its own variant because the client reacts to it globally (session
//! teardown) rather than displaying it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential (HTTP 401). The session store has
    /// already been torn down by the time the caller sees this.
    #[error("{message}")]
    Unauthorized { message: String },

    /// A non-401 error response with a message payload.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// Called outside a browser context (SSR or native tests).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// FastAPI error body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: String,
}

/// Build the error for a non-success response, given its status and body
/// text. Falls back to a status-based message when the body isn't the
/// expected `{"detail": ...}` shape.
pub fn from_response(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .ok()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));

    if status == 401 {
        ApiError::Unauthorized { message: detail }
    } else {
        ApiError::Api {
            status,
            message: detail,
        }
    }
}
