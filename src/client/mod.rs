//! Collaborators the editor talks to
//!
//! ```text
//! SectionEditor ──→ Transport     (HttpTransport over ureq, or a test double)
//!               └─→ ConfirmDialog (TerminalConfirm, AutoConfirm)
//! ```

mod dialog;
mod http;

pub use dialog::{AutoConfirm, TerminalConfirm};
pub use http::HttpTransport;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use strum::AsRefStr;

/// HTTP method of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Failed round-trip: either no response at all, or a non-success status.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError {
    /// HTTP status, `None` when the request never got a response
    pub status: Option<u16>,
    /// Parsed JSON error body, if the server sent one
    pub body: Option<Value>,
    pub message: String,
}

impl TransportError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        Self {
            status: None,
            body: None,
            message: msg.into(),
        }
    }

    pub fn status(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
            message: format!("HTTP {}", status),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => write!(f, "Network error: {}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}

/// Request/response transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` (if any) as JSON and return the parsed JSON response.
    /// An empty response body yields `Value::Null`.
    async fn submit(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

/// Confirmation dialog service.
///
/// Callers run the guarded action only when this returns `true`.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn yes_no_confirm(&self, message: &str) -> bool;
}
