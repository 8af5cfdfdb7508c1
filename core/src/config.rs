//! # Run Configuration
//!
//! Everything a patch run needs, built by the caller and passed in explicitly.

use crate::error::{AppError, AppResult};
use crate::patcher::ParenMatch;
use crate::rules::LetterPattern;
use crate::whitelist::Whitelist;
use std::path::PathBuf;

/// Directory walked by default, next to the executable.
pub const DEFAULT_ROOT_DIR: &str = "Il2CppInspector.Common";

/// File receiving the targeted rewrite.
pub const TARGET_FILE: &str = "Extensions.cs";

/// Extension of files receiving the generic rules.
pub const SOURCE_EXTENSION: &str = "cs";

/// Options for one patch run.
#[derive(Debug, Clone)]
pub struct PatchConfig {
    /// Directory walked recursively.
    pub root: PathBuf,
    /// Characters to insert.
    pub whitelist: Whitelist,
    /// Letter matching for the generic rules.
    pub letters: LetterPattern,
    /// Span extent for the targeted rewrite.
    pub parens: ParenMatch,
    /// Compute edits without writing.
    pub dry_run: bool,
    /// Exact file name receiving the targeted rewrite.
    pub target_file: String,
    /// Extension (without dot) receiving the generic rules.
    pub extension: String,
}

impl PatchConfig {
    /// Config with default matching modes for `root`.
    pub fn new(root: PathBuf, whitelist: Whitelist) -> Self {
        Self {
            root,
            whitelist,
            letters: LetterPattern::default(),
            parens: ParenMatch::default(),
            dry_run: false,
            target_file: TARGET_FILE.to_string(),
            extension: SOURCE_EXTENSION.to_string(),
        }
    }
}

/// `<directory of the running executable>/Il2CppInspector.Common`.
pub fn default_root() -> AppResult<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        AppError::General(format!("Executable path has no parent: {:?}", exe))
    })?;
    Ok(dir.join(DEFAULT_ROOT_DIR))
}
