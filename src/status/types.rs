//! WhoAPI status envelope and status errors.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error_handling::DecodeError;
use crate::status::TolerantInt;

/// Status code WhoAPI uses for a successful request.
pub const STATUS_OK: i64 = 0;

/// Error reported by WhoAPI in the `status` field of a JSON response.
///
/// The named variants cover the codes worth handling specifically; every other
/// non-zero code ends up in [`StatusError::Other`]. Two values are equal when
/// they carry the same code and description, so a freshly decoded status
/// compares equal to the matching named variant:
///
/// ```
/// use whoapi::StatusError;
///
/// let status = StatusError::from_status(12, "invalid API account").unwrap();
/// assert_eq!(status, StatusError::InvalidApiAccount);
/// ```
#[derive(Debug, Clone)]
pub enum StatusError {
    /// WhoAPI doesn't recognise the TLD (code 4).
    TldDoesNotExist,
    /// The whois server for the domain is not yet supported (code 7).
    ///
    /// For whois requests the body can still carry a valid and meaningful
    /// whois response (thick vs thin whois).
    WhoisNotYetSupported,
    /// Invalid API key (code 12).
    InvalidApiAccount,
    /// Request rate was exceeded (code 18).
    TooManyRequests,
    /// Any other non-zero status.
    Other {
        /// Status code
        code: i64,
        /// Status description as sent by WhoAPI
        description: String,
    },
}

impl StatusError {
    /// Classifies a status code. Returns `None` for [`STATUS_OK`].
    ///
    /// `description` is only kept for codes without a named variant.
    pub fn from_status(code: i64, description: &str) -> Option<Self> {
        match code {
            STATUS_OK => None,
            4 => Some(StatusError::TldDoesNotExist),
            7 => Some(StatusError::WhoisNotYetSupported),
            12 => Some(StatusError::InvalidApiAccount),
            18 => Some(StatusError::TooManyRequests),
            code => Some(StatusError::Other {
                code,
                description: description.to_string(),
            }),
        }
    }

    /// Numeric status code.
    pub fn code(&self) -> i64 {
        match self {
            StatusError::TldDoesNotExist => 4,
            StatusError::WhoisNotYetSupported => 7,
            StatusError::InvalidApiAccount => 12,
            StatusError::TooManyRequests => 18,
            StatusError::Other { code, .. } => *code,
        }
    }

    /// Status description.
    pub fn description(&self) -> &str {
        match self {
            StatusError::TldDoesNotExist => "TLD does not exist",
            StatusError::WhoisNotYetSupported => "whois server not yet supported",
            StatusError::InvalidApiAccount => "invalid API account",
            StatusError::TooManyRequests => "too many requests",
            StatusError::Other { description, .. } => description,
        }
    }

    /// Whether this is one of the named statuses.
    pub fn is_known(&self) -> bool {
        !matches!(self, StatusError::Other { .. })
    }
}

impl PartialEq for StatusError {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code() && self.description() == other.description()
    }
}

impl Eq for StatusError {}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WhoAPI: [{}] {}", self.code(), self.description())
    }
}

impl std::error::Error for StatusError {}

/// The `{status, status_desc}` pair carried by every WhoAPI response.
///
/// Request-specific fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusEnvelope {
    /// Status code, `0` on success
    #[serde(rename = "status")]
    pub code: TolerantInt,
    /// Status description
    #[serde(rename = "status_desc", default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl StatusEnvelope {
    /// Decodes the envelope from a raw response body.
    pub fn from_slice(data: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(data).map_err(DecodeError::Envelope)
    }

    /// Converts the envelope into an error, or `None` when the status is OK.
    pub fn status_error(&self) -> Option<StatusError> {
        StatusError::from_status(self.code.get(), &self.description)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
