#![deny(missing_docs)]

//! # Patch Command
//!
//! Resolves the whitelist and root, runs the walker and prints one line per
//! modified file.

use crate::error::CliResult;
use crate::prompt::read_whitelist;
use charpatch_core::{
    default_root, FileOutcome, LetterPattern, ParenMatch, PatchConfig, Reporter, Whitelist,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Letter matching for the generic literal rules.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LettersArg {
    /// Insert after the first ASCII letter of each literal.
    Letter,
    /// Insert after an `a-zA-Z` / `A-Za-z` range inside a literal.
    Range,
}

impl From<LettersArg> for LetterPattern {
    fn from(arg: LettersArg) -> Self {
        match arg {
            LettersArg::Letter => LetterPattern::Letter,
            LettersArg::Range => LetterPattern::Range,
        }
    }
}

/// Extent of the `allowSpecialChars` rewrite.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenArg {
    /// Replace up to the last `)` on the line.
    Greedy,
    /// Replace up to the first `)` after the declaration.
    First,
}

impl From<ParenArg> for ParenMatch {
    fn from(arg: ParenArg) -> Self {
        match arg {
            ParenArg::Greedy => ParenMatch::Greedy,
            ParenArg::First => ParenMatch::First,
        }
    }
}

/// Arguments for a patch run.
#[derive(clap::Args, Debug, Clone)]
pub struct PatchArgs {
    /// Characters to allow. Prompted for on stdin when absent.
    #[clap(long, env = "CHARPATCH_WHITELIST")]
    pub whitelist: Option<String>,

    /// Directory to patch. Defaults to `Il2CppInspector.Common` next to the executable.
    #[clap(long, env = "CHARPATCH_ROOT")]
    pub root: Option<PathBuf>,

    /// What counts as a letter in string literals.
    #[clap(long, value_enum, default_value = "letter")]
    pub letters: LettersArg,

    /// How far the `allowSpecialChars` rewrite reaches.
    #[clap(long, value_enum, default_value = "greedy")]
    pub paren: ParenArg,

    /// Report what would change without writing.
    #[clap(long)]
    pub dry_run: bool,

    /// Print a JSON summary of every visited file after the run.
    #[clap(long)]
    pub json: bool,
}

/// Prints each modified file as it is handled.
pub struct ConsoleReporter {
    dry_run: bool,
}

impl ConsoleReporter {
    /// Reporter for a real or dry run.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// The line printed for `outcome`.
    pub fn line(&self, outcome: &FileOutcome) -> String {
        if self.dry_run {
            format!("Would modify {}", outcome.path.display())
        } else {
            format!("Successfully modified {}", outcome.path.display())
        }
    }
}

impl Reporter for ConsoleReporter {
    fn modified(&mut self, outcome: &FileOutcome) {
        println!("{}", self.line(outcome));
    }
}

/// Builds the run configuration, prompting on `input`/`output` if needed.
pub fn build_config(
    args: &PatchArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> CliResult<PatchConfig> {
    let raw = match &args.whitelist {
        Some(wl) => wl.clone(),
        None => read_whitelist(input, output)?,
    };
    let root = match &args.root {
        Some(root) => root.clone(),
        None => default_root()?,
    };

    let mut config = PatchConfig::new(root, Whitelist::new(raw));
    config.letters = args.letters.into();
    config.parens = args.paren.into();
    config.dry_run = args.dry_run;
    Ok(config)
}

/// Executes a patch run.
pub fn execute(
    args: &PatchArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> CliResult<()> {
    let config = build_config(args, input, output)?;
    if config.whitelist.is_empty() {
        log::warn!("Whitelist is empty; literals will be left as they are");
    }

    let mut reporter = ConsoleReporter::new(config.dry_run);
    let outcomes = charpatch_core::run(&config, &mut reporter)?;

    if args.json {
        let summary = serde_json::to_string_pretty(&outcomes)?;
        writeln!(output, "{}", summary)?;
    }

    Ok(())
}
