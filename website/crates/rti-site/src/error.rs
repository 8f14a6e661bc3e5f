//! Site error types.

use std::net::SocketAddr;

use thiserror::Error;

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors that can stop the site or a backend refresh.
///
/// Request-level misses (unknown region, unmapped department) are not
/// errors; handlers answer those with a status code.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Bind failed.
    #[error("failed to bind to {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// Request to the content backend failed.
    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    /// The backend answered with a record for a different region.
    #[error("backend returned region {actual:?} when asked for {expected:?}")]
    SlugMismatch { expected: String, actual: String },
}
