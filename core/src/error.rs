//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// Every variant is fatal for a patch run; there is no retry or skip path.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (read, write, missing executable dir).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Directory traversal failed (permission denied, entry vanished).
    #[display("Walk Error: {_0}")]
    Walk(walkdir::Error),

    /// A substitution pattern failed to compile.
    #[display("Regex Error: {_0}")]
    Regex(regex::Error),

    /// File content is not valid UTF-8.
    #[from(ignore)]
    #[display("Encoding Error: {_0:?} is not valid UTF-8")]
    Encoding(PathBuf),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
