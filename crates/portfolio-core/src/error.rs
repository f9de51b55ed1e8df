//! # Loader Errors
//!
//! Error types for fetching repositories from the hosting API.

use thiserror::Error;

/// Errors that can occur while loading projects.
///
/// The page treats every upstream variant the same way: the project panel
/// degrades to the static list and shows one generic message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP transport error.
    #[error("upstream unavailable: network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("upstream unavailable: {status} - {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Failed to deserialize the response body.
    #[error("upstream unavailable: invalid response format: {0}")]
    InvalidResponse(String),

    /// The account handle was empty.
    #[error("account handle must not be empty")]
    EmptyHandle,
}

impl ApiError {
    /// Returns true if the error came from the remote side (transport,
    /// status or payload) rather than from the caller.
    #[must_use]
    pub fn is_upstream_unavailable(&self) -> bool {
        !matches!(self, Self::EmptyHandle)
    }
}

/// Result type for loader operations.
pub type ApiResult<T> = Result<T, ApiError>;
