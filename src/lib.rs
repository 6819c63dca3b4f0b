//! whoapi library: a client for the WhoAPI domain intelligence service.
//!
//! WhoAPI answers WHOIS, SSL certificate, domain availability and account
//! queries with a JSON document carrying a `status` code. This library issues
//! one HTTP GET per query and turns a non-zero status into a typed error.
//!
//! # Example
//!
//! ```no_run
//! use whoapi::{StatusError, WhoApiClient, WhoApiError};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Key taken from the WHOAPI_KEY environment variable
//! let client = WhoApiClient::new();
//!
//! match client.query("myaccount", "").await {
//!     Ok(body) => println!("{}", String::from_utf8_lossy(&body)),
//!     Err(WhoApiError::Status { status: StatusError::InvalidApiAccount, .. }) => {
//!         eprintln!("check WHOAPI_KEY");
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Queries are `async` and need a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
mod client;
pub mod config;
mod error_handling;
pub mod initialization;
mod status;

// Re-export public API
pub use client::{build_request_url, WhoApiClient};
pub use error_handling::{DecodeError, InitializationError, WhoApiError};
pub use status::{StatusEnvelope, StatusError, TolerantInt, STATUS_OK};
