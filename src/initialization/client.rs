//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::USER_AGENT;

/// Initializes the HTTP client used for WhoAPI queries.
///
/// Creates a `reqwest::Client` configured with:
/// - The crate User-Agent
/// - A total request timeout of `timeout`
///
/// The client is meant to be reused; it pools connections internally and is
/// safe to share between tasks.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (e.g. the TLS backend
/// cannot be initialized).
pub fn init_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
