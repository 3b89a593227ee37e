//! Error types for the todo API client.
//!
//! `NotFound` and `Validation` mirror the two error kinds the server reports
//! (404 and 422). Any other unexpected status lands in `HttpError` with the
//! raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422. Holds the raw response body, which names the
    /// offending field.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
