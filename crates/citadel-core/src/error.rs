//! Error types for Citadel

use thiserror::Error;

/// Main error type for Citadel operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The GraphQL endpoint answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body for debugging
        body: String,
    },

    /// The response carried a GraphQL `errors` list
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unrecognized value for a user-facing option (language, status, sort key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Failure recorded by the feed state machine.
///
/// Holds the rendered message rather than the source error so the feed stays
/// `Clone` and comparable inside reactive UI state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// No page was ever obtained; the feed has nothing to show
    #[error("Initial fetch failed: {message}")]
    InitialFetch {
        /// Underlying error message
        message: String,
    },

    /// A later page failed; earlier pages are still valid
    #[error("Fetching page {page} failed: {message}")]
    SubsequentFetch {
        /// Page number that was requested
        page: u32,
        /// Underlying error message
        message: String,
    },
}

impl FeedError {
    /// Underlying error message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            FeedError::InitialFetch { message } => message,
            FeedError::SubsequentFetch { message, .. } => message,
        }
    }

    /// Whether the feed can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FeedError::SubsequentFetch { .. })
    }
}
