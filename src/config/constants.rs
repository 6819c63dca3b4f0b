//! Configuration constants.
//!
//! This module defines the constants used throughout the crate: the remote
//! endpoint, the credential source, the transport timeout, and the exit codes
//! used by the command-line tool.

use std::time::Duration;

/// Base endpoint of the WhoAPI service.
///
/// WhoAPI is served over plain HTTP.
pub const DEFAULT_BASE_URL: &str = "http://api.whoapi.com";

/// Environment variable read when no API key has been configured.
pub const API_KEY_ENV_VAR: &str = "WHOAPI_KEY";

/// Timeout applied to the lazily created HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("whoapi-rs/", env!("CARGO_PKG_VERSION"));

// Query parameter names
/// API key parameter
pub const PARAM_API_KEY: &str = "apikey";
/// Request type parameter
pub const PARAM_REQUEST: &str = "r";
/// Domain parameter (sent even when empty)
pub const PARAM_DOMAIN: &str = "domain";

// Exit codes (2 is also what clap uses for usage errors)
/// Invalid command-line usage
pub const EXIT_USAGE: i32 = 2;
/// Failed to get data from the server (transport, HTTP status or WhoAPI status)
pub const EXIT_FETCH_FAILED: i32 = 3;
/// Failed to decode the JSON response
pub const EXIT_DECODE_FAILED: i32 = 4;
