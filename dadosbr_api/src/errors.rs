//! Error types for the API clients.

use crate::format::Format;

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The remote API answered with a non-success status.
    #[error("API request to {url} failed with status {status}: {body}")]
    Api {
        url: String,
        status: u16,
        body: String,
    },
    /// The operation does not support the requested output format.
    /// Raised before any request is sent.
    #[error("Unsupported format `{format}`, expected one of: {expected}")]
    UnsupportedFormat {
        format: Format,
        expected: &'static str,
    },
    /// A string did not match any variant of a closed vocabulary.
    #[error("Unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
    /// A base URL or endpoint path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A body dispatched as JSON could not be decoded.
    #[error("Failed to decode JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}
