//! Error types for port operations.

/// Failures talking to the remote catalog for a single key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, reset, ...)
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not a JSON document.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The client could not be set up (bad base URL, TLS backend, ...)
    #[error("Catalog client setup failed: {0}")]
    Setup(String),
}

impl CatalogError {
    pub fn request_failed(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }

    pub fn setup(message: impl ToString) -> Self {
        Self::Setup(message.to_string())
    }
}
