//! # Whitelist Prompt
//!
//! Reads the whitelist interactively when it was not passed on the command
//! line.

use crate::error::CliResult;
use std::io::{BufRead, Write};

/// Text shown before reading.
pub const PROMPT: &str = "Enter the characters you want to allow: ";

/// Prints the prompt to `output` and reads one line from `input`.
///
/// Only the line terminator is removed. EOF yields an empty string.
pub fn read_whitelist(input: &mut impl BufRead, output: &mut impl Write) -> CliResult<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
