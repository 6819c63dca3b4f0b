//! Exit code policy for the command-line tool.

use crate::config::{EXIT_DECODE_FAILED, EXIT_FETCH_FAILED};
use crate::error_handling::WhoApiError;

/// Maps a query failure to the process exit code.
///
/// Decode failures get their own code; everything that prevented a usable
/// answer from the server (transport, HTTP status, WhoAPI status) exits with
/// `EXIT_FETCH_FAILED`.
pub fn exit_code_for(error: &WhoApiError) -> i32 {
    match error {
        WhoApiError::Decode(_) => EXIT_DECODE_FAILED,
        WhoApiError::Transport(_) | WhoApiError::HttpStatus { .. } | WhoApiError::Status { .. } => {
            EXIT_FETCH_FAILED
        }
    }
}
