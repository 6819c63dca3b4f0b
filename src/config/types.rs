//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored, human-readable lines
    Plain,
    /// One JSON object per line
    Json,
}

const AFTER_HELP: &str = "\
See https://whoapi.com/api-functions.html for possible request types.

Examples:

  whoapi whois whoapi.com
  whoapi cert google.com
  whoapi myaccount";

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Pretty-printed WHOIS lookup, key taken from WHOAPI_KEY
/// whoapi whois whoapi.com
///
/// # Raw account information with an explicit key
/// whoapi --key 0123456789 --raw myaccount
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "whoapi",
    version,
    about = "Queries the WhoAPI domain intelligence service.",
    after_help = AFTER_HELP
)]
pub struct Opt {
    /// Request type (e.g. whois, cert, myaccount)
    pub request: String,

    /// Domain to query (not needed by every request type)
    pub domain: Option<String>,

    /// API key (if not set the WHOAPI_KEY environment variable will be used)
    #[arg(short, long, default_value = "")]
    pub key: String,

    /// Print raw response from server
    #[arg(long)]
    pub raw: bool,

    /// Fail when WhoAPI reports a non-zero status in the response body
    #[arg(long)]
    pub check_status: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Domain argument, empty when it was omitted.
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or_default()
    }
}
