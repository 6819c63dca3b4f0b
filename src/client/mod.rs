//! WhoAPI client.
//!
//! A [`WhoApiClient`] owns the API key and the HTTP transport and issues one
//! GET request per query:
//! - `raw_query()` returns the response body untouched
//! - `query()` additionally decodes the status envelope and turns a non-zero
//!   status into [`WhoApiError::Status`]
//!
//! Reference: <https://whoapi.com/api-documentation.html>

mod request;

use std::fmt;
use std::sync::{LazyLock, OnceLock};

use hyper::ext::ReasonPhrase;
use log::{debug, warn};
use reqwest::StatusCode;
use url::Url;

use crate::config::{API_KEY_ENV_VAR, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
use crate::error_handling::WhoApiError;
use crate::initialization::init_client;
use crate::status::StatusEnvelope;

pub use request::build_request_url;

static DEFAULT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"));

/// Client which talks to WhoAPI.
///
/// Both the API key and the HTTP client are optional. When unset they are
/// resolved on first use and kept for the lifetime of the value:
/// - the key is read from the `WHOAPI_KEY` environment variable
/// - an HTTP client with a 30 second timeout is created
///
/// So with `WHOAPI_KEY` exported, `WhoApiClient::default()` is ready to use.
/// Resolution goes through `OnceLock`, so the client can be shared between
/// tasks even before its first query.
///
/// # Example
///
/// ```no_run
/// use whoapi::{StatusError, WhoApiClient, WhoApiError};
///
/// # async fn example() -> Result<(), WhoApiError> {
/// let client = WhoApiClient::new().with_key("0123456789abcdef");
/// match client.query("whois", "whoapi.com").await {
///     Ok(body) => println!("{}", String::from_utf8_lossy(&body)),
///     // Thin whois: the body is still worth reading
///     Err(WhoApiError::Status { status: StatusError::WhoisNotYetSupported, body }) => {
///         println!("{}", String::from_utf8_lossy(&body))
///     }
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct WhoApiClient {
    key: OnceLock<String>,
    http: OnceLock<reqwest::Client>,
    base_url: Option<Url>,
}

// The key is a credential, never print it
impl fmt::Debug for WhoApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhoApiClient")
            .field("key", &self.key.get().map(|_| "<redacted>"))
            .field("http", &self.http)
            .field("base_url", &self.base_url())
            .finish()
    }
}

impl WhoApiClient {
    /// Creates a client taking its key from `WHOAPI_KEY`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. An empty key keeps the environment fallback.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.key = if key.is_empty() {
            OnceLock::new()
        } else {
            OnceLock::from(key)
        };
        self
    }

    /// Uses the given HTTP client instead of creating one.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = OnceLock::from(client);
        self
    }

    /// Points the client at another endpoint (a proxy or a mock server).
    ///
    /// # Errors
    ///
    /// Returns a `url::ParseError` if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, url::ParseError> {
        self.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Endpoint queries are sent to.
    pub fn base_url(&self) -> &Url {
        self.base_url.as_ref().unwrap_or(&*DEFAULT_URL)
    }

    /// Makes an API request and returns the body without any processing.
    ///
    /// # Errors
    ///
    /// - [`WhoApiError::Transport`] if the request could not complete
    /// - [`WhoApiError::HttpStatus`] if the response is not `200 OK`; no body is
    ///   returned in that case
    pub async fn raw_query(&self, request: &str, domain: &str) -> Result<Vec<u8>, WhoApiError> {
        let url = build_request_url(self.base_url(), self.api_key(), request, domain);
        debug!("WhoAPI request r={} domain={:?}", request, domain);

        // The key travels in the query string, keep it out of error messages
        let response = self
            .transport()?
            .get(url)
            .send()
            .await
            .map_err(|e| WhoApiError::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("WhoAPI answered r={} with HTTP {}", request, status);
            return Err(WhoApiError::HttpStatus {
                code: status.as_u16(),
                reason: reason_phrase(&response),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WhoApiError::Transport(e.without_url()))?;
        debug!("WhoAPI response r={}: {} bytes", request, body.len());
        Ok(body.to_vec())
    }

    /// Makes an API request and checks the status reported in the body.
    ///
    /// Returns the raw JSON body when the status is `0`. For any other status
    /// the body is returned inside [`WhoApiError::Status`] along with the
    /// classified [`crate::StatusError`].
    ///
    /// # Errors
    ///
    /// - any error from [`WhoApiClient::raw_query`], unchanged
    /// - [`WhoApiError::Decode`] if the body has no valid status envelope
    /// - [`WhoApiError::Status`] if WhoAPI reported a non-zero status
    pub async fn query(&self, request: &str, domain: &str) -> Result<Vec<u8>, WhoApiError> {
        let body = self.raw_query(request, domain).await?;
        let envelope = StatusEnvelope::from_slice(&body)?;

        match envelope.status_error() {
            None => Ok(body),
            Some(status) => {
                warn!("WhoAPI r={} domain={:?}: {}", request, domain, status);
                Err(WhoApiError::Status { status, body })
            }
        }
    }

    fn api_key(&self) -> &str {
        self.key
            .get_or_init(|| std::env::var(API_KEY_ENV_VAR).unwrap_or_default())
    }

    fn transport(&self) -> Result<&reqwest::Client, WhoApiError> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }
        let client = init_client(REQUEST_TIMEOUT)?;
        // Another task may have won the race; either client is fine
        Ok(self.http.get_or_init(|| client))
    }
}

/// Reason phrase of the status line as sent by the server.
///
/// hyper only keeps the phrase when it differs from the canonical one.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
