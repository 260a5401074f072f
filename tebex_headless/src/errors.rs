//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Nothing here is retried or reinterpreted: the remote service's answer
/// reaches the caller as-is.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL combined with the route did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// A string did not name a known variant of a closed set.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns the HTTP status for [`Error::HttpStatus`], or the transport
    /// status if reqwest recorded one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
