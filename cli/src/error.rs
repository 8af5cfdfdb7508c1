#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use charpatch_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper (prompt, stdout).
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure inside the patch run.
    #[display("{}", _0)]
    Core(AppError),

    /// Summary serialization failure.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
