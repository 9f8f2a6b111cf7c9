//! ANBIMA-specific error types.

use thiserror::Error;

/// Errors from the ANBIMA adapter.
#[derive(Debug, Error, Clone)]
pub enum AnbimaError {
    /// Token exchange was rejected, or the feed rejected the token even
    /// after a fresh authentication.
    #[error("authentication failed: HTTP {status}: {body}")]
    AuthenticationFailed {
        /// HTTP status returned by the provider.
        status: u16,
        /// Response body returned by the provider.
        body: String,
    },

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// API returned a non-success status for a data request.
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status returned by the provider.
        status: u16,
        /// Response body returned by the provider.
        body: String,
    },

    /// Network error (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl AnbimaError {
    /// Whether this error aborts the run.
    ///
    /// Per-day `Api`/`Network`/`JsonParse` failures follow the skip-day
    /// policy; authentication and client-construction failures do not.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. } | Self::Http(_))
    }
}
