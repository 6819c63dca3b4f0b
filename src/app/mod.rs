//! Command-line application helpers.
//!
//! This module provides output rendering and the exit code policy used by the
//! `whoapi` binary.

pub mod exit;
pub mod output;

// Re-export public API
pub use exit::exit_code_for;
pub use output::render_output;
