//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whoapi` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the response and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use whoapi::app::{exit_code_for, render_output};
use whoapi::config::{Opt, EXIT_DECODE_FAILED, EXIT_FETCH_FAILED};
use whoapi::initialization::init_logger_with;
use whoapi::{WhoApiClient, WhoApiError};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so WHOAPI_KEY
    // can live there. Try the current directory first, then the executable's.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Usage errors exit with code 2 from here
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = WhoApiClient::new().with_key(opt.key.as_str());
    let result = if opt.check_status {
        client.query(&opt.request, opt.domain()).await
    } else {
        client.raw_query(&opt.request, opt.domain()).await
    };

    // A WhoAPI status error still comes with a body worth printing
    let (data, status) = match result {
        Ok(data) => (data, None),
        Err(WhoApiError::Status { status, body }) => (body, Some(status)),
        Err(e) => {
            eprintln!("whoapi: {}", e);
            process::exit(exit_code_for(&e));
        }
    };

    let out = match render_output(&data, opt.raw) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("whoapi: {}", e);
            process::exit(EXIT_DECODE_FAILED);
        }
    };
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&out)
        .and_then(|_| stdout.flush())
        .context("Failed to write response")?;

    if let Some(status) = status {
        eprintln!("whoapi: {}", status);
        process::exit(EXIT_FETCH_FAILED);
    }

    Ok(())
}
