//! Error types shared between the core logic and the web front end.

use thiserror::Error;

/// Network/request-related errors for the remote API.
///
/// Every failed search, directory listing, or file fetch maps to exactly one
/// of these variants; there is no retry layer on top.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to construct the HTTP request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network failure (DNS, CORS, connection reset, ...)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx HTTP response
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read the response body
    #[error("failed to read response")]
    ResponseRead,
    /// Request timed out
    #[error("request timed out")]
    Timeout,
    /// Response body was not the expected JSON shape
    #[error("unexpected response: {0}")]
    InvalidJson(String),
}

/// Errors produced while decoding a fetched file for preview.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The base64 payload could not be decoded
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    /// Decoded bytes are not valid UTF-8; the file is treated as binary
    #[error("file content is not text")]
    Binary,
}
