//! Error handling for availability checking operations.
//!
//! This module defines a comprehensive error type that covers all the different
//! ways an availability run can fail, from network issues to invalid input.

use std::fmt;

/// Main error type for availability checking operations.
///
/// This enum covers all possible failure modes in the checking process,
/// providing detailed context for debugging and user-friendly error messages.
///
/// Malformed XML from the registrar is deliberately NOT represented here:
/// the parser degrades it to an `errors` entry inside
/// [`crate::BatchResponse`] so the run can continue.
#[derive(Debug, Clone)]
pub enum CheckError {
    /// No usable domain names were supplied
    Input { message: String },

    /// Missing or empty API credentials
    Credentials { message: String },

    /// Domain list file could not be opened or read
    File { path: String, message: String },

    /// Network-related errors (connection, DNS, TLS, HTTP status)
    Network {
        message: String,
        source: Option<String>,
    },

    /// Timeout errors when a request takes too long
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl CheckError {
    /// Create a new input error.
    pub fn input<M: Into<String>>(message: M) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a new credentials error.
    pub fn credentials<M: Into<String>>(message: M) -> Self {
        Self::Credentials {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::File {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is caused by bad user input (domains or
    /// credentials) rather than the environment.
    ///
    /// The CLI maps these to a distinct exit code.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::Input { .. } | Self::Credentials { .. } | Self::File { .. }
        )
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { message } => {
                write!(f, "Input error: {}", message)
            }
            Self::Credentials { message } => {
                write!(f, "Credential error: {}", message)
            }
            Self::File { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Network { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for CheckError {}

// Implement From conversions for common error types
impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout("HTTP request", std::time::Duration::from_secs(30))
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal {
            message: format!("JSON serialization failed: {}", err),
        }
    }
}
