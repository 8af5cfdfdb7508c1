#![deny(missing_docs)]

//! # charpatch CLI
//!
//! Inserts a character whitelist into the generated C# sources of
//! `Il2CppInspector.Common`: the `allowSpecialChars` default in
//! `Extensions.cs`, and matching string literals in every other `.cs` file.

use clap::Parser;

use crate::error::CliResult;

mod error;
mod logger;
mod patch;
mod prompt;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Whitelist characters in generated C# sources")]
struct Cli {
    #[clap(flatten)]
    patch: patch::PatchArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    patch::execute(&cli.patch, &mut stdin.lock(), &mut stdout)?;

    Ok(())
}
