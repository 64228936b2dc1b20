//! Error types for storefront API calls.
//!
//! Transport failures and missing resources are separate variants so
//! screens can tell "not found" apart from "could not ask".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request URL could not be built
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Failed to reach the storefront
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// The storefront answered 404, or answered with no data
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The storefront answered with a non-success status
    #[error("Storefront error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("Unexpected response from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Short message for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "Client setup failed",
            ApiError::InvalidUrl { .. } => "Client setup failed",
            ApiError::Connection { .. } => "Could not reach the store",
            ApiError::Timeout { .. } => "The store took too long to answer",
            ApiError::NotFound { .. } => "Not found",
            ApiError::Status { status, .. } if *status == 401 || *status == 403 => {
                "Invalid email or password"
            }
            ApiError::Status { .. } => "The store returned an error",
            ApiError::Decode { .. } => "The store sent an unexpected response",
        }
    }

    /// Stable error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Status { .. } => "upstream_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}
