#![deny(missing_docs)]

//! # charpatch core
//!
//! Inserts a whitelist of characters into generated C# sources by regex
//! substitution.

/// Shared error types.
pub mod error;

/// Quote-context escaping.
pub mod escape;

/// The user-supplied character whitelist.
pub mod whitelist;

/// Generic literal substitution rules.
pub mod rules;

/// Per-file edits.
pub mod patcher;

/// Run configuration.
pub mod config;

/// File reading and writing.
pub mod source_file;

/// Recursive traversal and write-back.
pub mod walker;

pub use config::{default_root, PatchConfig, DEFAULT_ROOT_DIR, SOURCE_EXTENSION, TARGET_FILE};
pub use error::{AppError, AppResult};
pub use escape::{escape_literal, QuoteStyle};
pub use patcher::{EditKind, ParenMatch, Patch, Patcher, TargetedRewrite};
pub use rules::{split_at_letter, LetterPattern, RuleSet, SubstitutionRule};
pub use whitelist::Whitelist;
pub use walker::{classify, run, FileOutcome, Reporter};
