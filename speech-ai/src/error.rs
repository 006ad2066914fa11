//! Error types for speech AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations map their native errors to these variants,
/// preserving context while keeping the orchestration code provider-agnostic.
#[derive(Debug)]
pub enum Error {
    /// API key missing, invalid or lacking permissions.
    Authentication(String),

    /// Network connectivity issues, DNS failures, or connection resets.
    Network(String),

    /// Invalid parameters or missing configuration such as an unset API key.
    Configuration(String),

    /// Provider-side business failure (unsupported audio format, model refused, ...).
    Provider(String),

    /// Operation exceeded the configured timeout.
    Timeout(String),

    /// Provider rate limit or quota exceeded.
    RateLimited { retry_after_seconds: u64 },

    /// Response body could not be deserialized into the expected shape.
    Deserialization(String),

    /// Response had the expected shape but violates its contract
    /// (empty transcript, score outside 0..=100, ...).
    InvalidResponse(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::RateLimited {
                retry_after_seconds,
            } => {
                write!(f, "Rate limited: retry after {}s", retry_after_seconds)
            }
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialization(err.to_string())
    }
}
