// rucensor/src/lib.rs
//! # RuCensor CLI Application
//!
//! Command-line front end for `rucensor-core`: masks or reports obfuscated
//! Russian profanity in text read from stdin or a file.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod output;

pub use commands::censor::run_censor;
pub use commands::check::run_check;
