// rucensor/src/logger.rs
//! Logger setup for the `rucensor` binary.
//!
//! Logs always go to stderr so they never mix with censored output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Environment variable consulted for the log filter, `RUST_LOG` style.
pub const LOG_ENV: &str = "RUST_LOG";

/// Initializes `env_logger`. An explicit `level` overrides `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
