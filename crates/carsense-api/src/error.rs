use thiserror::Error;

/// Errors produced by the runtime API client.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The runtime rejected the access token.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The runtime answered with a non-success status.
    #[error("runtime API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A URL could not be constructed from the configured base.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
