//! Error type definitions.
//!
//! This module defines every error returned by the library and by the
//! initialization helpers.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::status::StatusError;

/// Error types for initialization failures.
///
/// The HTTP client is created lazily by [`crate::WhoApiClient`], so a failure
/// there surfaces as [`WhoApiError::Transport`] instead.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure to decode a WhoAPI response or one of its fields.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A number-or-quoted-number token did not hold a valid integer.
    #[error("invalid integer value {token:?}: {source}")]
    Integer {
        /// The raw JSON token as received
        token: String,
        /// Parse failure for the token contents
        #[source]
        source: serde_json::Error,
    },

    /// The body is not JSON or does not carry a status envelope.
    #[error("invalid status envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The body could not be re-indented for display.
    #[error("invalid JSON response: {0}")]
    Json(#[source] serde_json::Error),
}

/// Errors returned by [`crate::WhoApiClient`].
#[derive(Error, Debug)]
pub enum WhoApiError {
    /// Connection, timeout or body read failure.
    #[error("WhoAPI transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// The server answered with something other than `200 OK`.
    #[error("WhoAPI HTTP error: {code} {reason}")]
    HttpStatus {
        /// HTTP status code
        code: u16,
        /// Reason phrase of the status line
        reason: String,
    },

    /// The response body could not be decoded.
    #[error("WhoAPI decode error: {0}")]
    Decode(#[from] DecodeError),

    /// WhoAPI reported a non-zero status. The body is kept since some
    /// statuses (e.g. whois server not yet supported) still carry usable data.
    #[error("{status}")]
    Status {
        /// Classified status
        status: StatusError,
        /// Raw response body
        body: Vec<u8>,
    },
}

impl WhoApiError {
    /// Raw response body, present only for [`WhoApiError::Status`].
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            WhoApiError::Status { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    /// Classified WhoAPI status, present only for [`WhoApiError::Status`].
    pub fn status(&self) -> Option<&StatusError> {
        match self {
            WhoApiError::Status { status, .. } => Some(status),
            _ => None,
        }
    }
}
