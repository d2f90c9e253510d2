//! Error type definitions for the HLS resolver service
//!
//! Every failure a request can hit maps to exactly one variant here, so the
//! web layer can translate it into a single unambiguous HTTP status. There
//! is no retry or partial-result path: a request either produces a full
//! quality map or fails with one of these.

use thiserror::Error;

/// Top-level application error type
///
/// Uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller supplied neither a video id nor a playlist URL
    #[error("Missing id or url query param")]
    MissingParam,

    /// Metadata was fetched but contained no usable master playlist URL
    #[error("Could not find master playlist URL in metadata")]
    QualityNotFound,

    /// Playlist text yielded no variants and no media-segment evidence
    #[error("No variant playlists found in master playlist")]
    NoVariants,

    /// The provider answered with a non-success HTTP status
    #[error("Upstream request failed: {status} for {url}")]
    Upstream { status: u16, url: String },

    /// Transport-level HTTP client errors (timeouts, DNS, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create an upstream error preserving the provider's status code
    pub fn upstream<U: Into<String>>(status: u16, url: U) -> Self {
        Self::Upstream {
            status,
            url: url.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
