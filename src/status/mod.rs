//! Response status decoding.
//!
//! Every WhoAPI response carries a `status` code and a `status_desc`. This
//! module provides:
//! - `TolerantInt` - integers sent either as numbers or as quoted numbers
//! - `StatusEnvelope` - the decoded `{status, status_desc}` pair
//! - `StatusError` - the classification of a non-zero status

mod int;
mod types;

// Re-export public API
pub use int::TolerantInt;
pub use types::{StatusEnvelope, StatusError, STATUS_OK};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
