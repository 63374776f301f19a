//! Error types for sift.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - `ConfigError` - malformed config file
//!   - `LoggingError` - tracing subscriber setup
//!   - `TuiError` - terminal failures
//!   - [`ClientError`] - HTTP client construction
//! - [`ClientError`] - remote lookup/search failures (never fatal once running)
//! - [`StoreError`] - key-value persistence failures (never fatal)
//!
//! # Recovery Strategy
//!
//! Failures of the two asynchronous operations are caught at their boundary
//! and turned into UI state transitions:
//!
//! - autocomplete failure: fall back to history-only suggestions, or hide
//! - search failure: single error banner, loading cleared
//! - persistence failure: logged and ignored, history stays in memory
//!
//! Only startup errors (config, logging, terminal) reach `main`.

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] ClientError),
}

/// Failure of a remote autocomplete or search request.
///
/// Cloneable so completions can be inspected and logged after being routed
/// through the dispatcher channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection, DNS, TLS or timeout failure. No response was received.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// `message` carries the `error` field of the JSON body when present.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided error text, used verbatim in the UI.
        message: Option<String>,
    },

    /// A success response whose body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Server-provided error text, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Failure of the durable key-value store.
///
/// Always non-fatal: callers log the error and carry on with in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// Backing file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {reason}")]
    Corrupt {
        /// Backing file path.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value could not be encoded.
    #[error("failed to encode value for key {key}: {reason}")]
    Encode {
        /// Key being written.
        key: String,
        /// Serializer error details.
        reason: String,
    },

    /// The store refused the write (e.g. a full or read-only backend).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_status_with_text() {
        let err = ClientError::Status {
            status: 400,
            message: Some("bad query".to_string()),
        };
        assert_eq!(err.server_message(), Some("bad query"));

        let err = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.server_message(), None);

        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn encode_error_names_the_key_written() {
        let err = StoreError::Encode {
            key: "search_history".to_string(),
            reason: "invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to encode value for key search_history: invalid"
        );
    }

    #[test]
    fn empty_server_message_is_ignored() {
        let err = ClientError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn store_error_display_includes_path() {
        let err = StoreError::Corrupt {
            path: PathBuf::from("/tmp/storage.json"),
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("/tmp/storage.json"));
    }
}
