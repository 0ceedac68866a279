//! Error types for the push pipeline.
//!
//! Every error is terminal for a run. [`PushError`] is the one value the
//! pipeline hands back to its caller, and [`PushError::kind`] names the
//! category it belongs to.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PushError>;

/// Top-level pipeline error.
#[derive(Debug, Error)]
pub enum PushError {
    /// Missing or conflicting options, or an out-of-range ttl.
    #[error("{0}")]
    Usage(String),

    /// The push-definition file could not be opened or read.
    #[error("Error reading file {}: {source}", .path.display())]
    FileAccess {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The push-definition file is not well-formed.
    #[error("Error parsing file {}: {source}", .path.display())]
    Decode {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The decoded push definition breaks a notification/data rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The delivery service rejected or never received the request.
    #[error("Failed to send message: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Error category, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    FileAccess,
    Decode,
    Validation,
    Delivery,
}

impl PushError {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// The category this error falls in.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::FileAccess { .. } => ErrorKind::FileAccess,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Delivery(_) => ErrorKind::Delivery,
        }
    }
}

/// Push-definition rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `notification.body` is set but `notification.title` is not.
    #[error("In your notification file, if body is set, then title must also be set")]
    BodyWithoutTitle,

    /// `notification.title` is set but `notification.body` is not.
    #[error("In your notification file, if title is set, then body must also be set")]
    TitleWithoutBody,

    /// Neither a notification nor any data entries.
    #[error("The pushFile must contain either a notification or a non-empty map of data or both")]
    Empty,
}

/// Failures talking to the delivery service.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The service-account credentials could not be loaded.
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    /// Authentication with the token endpoint failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout error.
    #[error("Operation timed out")]
    Timeout,

    /// The target token is not registered.
    #[error("Device unregistered: {0}")]
    Unregistered(String),

    /// Rate limited.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// The service answered with an error status.
    #[error("FCM error {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message reported by the service.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DeliveryError {
    /// Whether sending again could succeed. Nothing in this crate retries;
    /// this is for callers embedding the client.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::RateLimited(_)
        )
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() || err.is_request() {
            Self::Network(err.to_string())
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// The current UTC time could not be determined.
#[derive(Debug, Error)]
#[error("Unable to resolve current UTC time: {0}")]
pub struct ClockError(pub String);
