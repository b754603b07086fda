use serde_json::Value;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum OmnibusError {
    /// An error occurred in the HTTP transport (connection, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured host, or a URL derived from it, could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The login endpoint rejected the credentials.
    ///
    /// Carries the first server-supplied message, or `"Unknown error"` when none was sent.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The server answered an API call with a status other than `200 OK`.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The decoded error body, when the server sent valid JSON.
        body: Option<Value>,
    },

    /// The response body was not valid JSON (or did not match the requested type).
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        /// The URL whose body failed to decode.
        url: String,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// An endpoint path that would leave `{host}/api/`: a scheme, an authority, or a
    /// `.`/`..` segment.
    #[error("invalid endpoint path: {0}")]
    InvalidPath(String),

    /// The client was configured without a required setting.
    #[error("configuration error: {0}")]
    Config(String),
}

impl OmnibusError {
    /// The HTTP status code, for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            OmnibusError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
