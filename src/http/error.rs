//! Typed HTTP failure carrying the response status code.

use reqwest::StatusCode;

/// A non-2xx response from the remote service.
///
/// Carried through `anyhow` and recovered with `downcast_ref` where a caller
/// needs to branch on the status code (the CLI maps 401 to a credential
/// message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpError {
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    /// Whether this failure means the supplied credentials were rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP error (response {})", self.status.as_u16())
    }
}

impl std::error::Error for HttpError {}
