//! # Logger
//!
//! `env_logger` setup. `RUST_LOG` wins when set; otherwise `-v` flags pick
//! the level.

use log::LevelFilter;

/// Maps the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes the global logger. Safe to call more than once.
pub fn init_logger(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(level_for(verbosity).as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
