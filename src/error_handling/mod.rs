//! Error handling.
//!
//! Error types are split by where they originate:
//! - **Transport / HTTP status**: the request never produced a WhoAPI response
//! - **Decode**: a response arrived but its JSON could not be read
//! - **Status**: a well-formed response reporting an application-level failure
//! - **Initialization**: logger or HTTP client setup failed

mod types;

// Re-export public API
pub use types::{DecodeError, InitializationError, WhoApiError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusError;

    #[test]
    fn test_http_status_error_display() {
        let err = WhoApiError::HttpStatus {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "WhoAPI HTTP error: 503 Service Unavailable");
        assert!(err.body().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_status_error_keeps_body() {
        let body = br#"{"status":7,"status_desc":"whois server not yet supported"}"#.to_vec();
        let err = WhoApiError::Status {
            status: StatusError::WhoisNotYetSupported,
            body: body.clone(),
        };
        assert_eq!(err.body(), Some(body.as_slice()));
        assert_eq!(err.status(), Some(&StatusError::WhoisNotYetSupported));
        assert_eq!(
            err.to_string(),
            "WhoAPI: [7] whois server not yet supported"
        );
    }

    #[test]
    fn test_decode_error_identifies_source() {
        let source = serde_json::from_str::<i64>("x").unwrap_err();
        let err = DecodeError::Integer {
            token: "\"x\"".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid integer value"));

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WhoApiError = DecodeError::Envelope(source).into();
        assert!(err.to_string().contains("invalid status envelope"));
    }
}
