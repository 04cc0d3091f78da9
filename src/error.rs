//! Error types for the weather client and the playlist table

use thiserror::Error;

/// The provider API key is not configured. Fatal for the current request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("SYSTEM ERROR: API Key not found! Please set OPENWEATHER_API_KEY or check your .env file.")]
pub struct ConfigurationError;

/// Why a weather lookup produced no observation.
///
/// Only `MissingApiKey` changes the control flow of a request; the other
/// variants exist for diagnostics and are collapsed into "absent" by
/// [`crate::client::WeatherClient::fetch`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("empty place name")]
    EmptyQuery,

    #[error("place not found")]
    NotFound,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Malformed(String),
}

impl From<TransportError> for FetchError {
    fn from(error: TransportError) -> Self {
        FetchError::Transport(error.0)
    }
}

/// Failure below the HTTP status level (DNS, connect, TLS, reading the body)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Problems building a playlist table from user-supplied data
#[derive(Error, Debug)]
pub enum TableError {
    #[error("playlist table has no \"default\" bucket")]
    MissingDefault,

    #[error("bucket \"{0}\" has no entries")]
    EmptyBucket(String),

    #[error("failed to read playlist table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse playlist table: {0}")]
    Parse(#[from] serde_json::Error),
}
