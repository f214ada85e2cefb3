//! Client error types.

use thiserror::Error;

/// Errors that can occur while fetching from the commerce service.
///
/// The catalog view does not tell these apart: any of them leaves the
/// catalog empty and is only logged.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or read the reply.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No usable client could be built.
    #[error("Commerce service unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

/// Errors raised while reading client configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable was absent or blank.
    #[error("missing required configuration `{0}`")]
    MissingKey(&'static str),

    /// The API URL is not an http(s) URL.
    #[error("invalid value for `{key}`: `{value}` must start with http:// or https://")]
    InvalidUrl { key: &'static str, value: String },
}
