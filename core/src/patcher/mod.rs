#![deny(missing_docs)]

//! # Source Patching
//!
//! Text-level edits applied to a single file's content.
//!
//! - **targeted**: the `allowSpecialChars` default-parameter rewrite.
//! - Generic substitution lives in [`crate::rules`]; [`Patcher`] picks one of
//!   the two per file.

/// The `Extensions.cs` default-parameter rewrite.
pub mod targeted;

pub use targeted::{ParenMatch, TargetedRewrite, DECLARATION};

use crate::config::PatchConfig;
use crate::error::AppResult;
use crate::rules::RuleSet;
use serde::Serialize;

/// Which edit a file receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// The targeted default-parameter rewrite.
    Targeted,
    /// The two generic literal rules.
    Generic,
}

/// Result of patching one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// The rewritten content.
    pub content: String,
    /// Number of spans replaced.
    pub hits: usize,
}

/// Both edits, compiled once per run from the configuration.
#[derive(Debug, Clone)]
pub struct Patcher {
    rules: RuleSet,
    targeted: TargetedRewrite,
}

impl Patcher {
    /// Compiles all patterns for the configured whitelist.
    pub fn new(config: &PatchConfig) -> AppResult<Self> {
        Ok(Self {
            rules: RuleSet::build(&config.whitelist, config.letters)?,
            targeted: TargetedRewrite::new(&config.whitelist, config.parens)?,
        })
    }

    /// Applies the edit selected by `kind`.
    pub fn patch(&self, kind: EditKind, content: &str) -> Patch {
        let (content, hits) = match kind {
            EditKind::Targeted => self.targeted.apply(content),
            EditKind::Generic => self.rules.apply(content),
        };
        Patch { content, hits }
    }
}
