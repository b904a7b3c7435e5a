// rucensor/src/cli.rs
//! Command-line interface definition for the `rucensor` application.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rucensor_core::Variant;
use std::path::PathBuf;

/// Default cap on input size, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1 << 20;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rucensor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and mask obfuscated Russian profanity",
    long_about = "rucensor folds look-alike characters, digits and stretched letters back to canonical Russian text and matches it against a library of obscene roots. Offending words are masked in place, keeping the text's length and whitespace intact.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rucensor` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks every offending word of the input.
    Censor(CensorCommand),
    /// Reports whether the input contains an offending word. Exits with 1 if it does.
    Check(CheckCommand),
}

/// The built-in root list to start from.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    /// Full hand-tuned root library.
    Strict,
    /// Core roots only.
    Normal,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Strict => Variant::Strict,
            VariantArg::Normal => Variant::Normal,
        }
    }
}

/// Engine construction flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Which built-in root list to use.
    #[arg(long, value_enum, default_value = "normal", env = "RUCENSOR_VARIANT")]
    pub variant: VariantArg,

    /// A YAML pattern library merged over the built-in one.
    #[arg(long, value_name = "FILE")]
    pub library: Option<PathBuf>,

    /// Extra deny pattern (regex). May be repeated.
    #[arg(long = "deny", value_name = "PATTERN")]
    pub deny: Vec<String>,

    /// Extra allow pattern (regex). May be repeated.
    #[arg(long = "allow", value_name = "PATTERN")]
    pub allow: Vec<String>,

    /// Start with an empty deny list; only --deny patterns apply.
    #[arg(long)]
    pub no_default_deny: bool,

    /// Start with an empty allow list; only --allow patterns apply.
    #[arg(long)]
    pub no_default_allow: bool,

    /// Refuse inputs larger than this many bytes.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_input_bytes: usize,
}

/// Arguments for the `censor` command.
#[derive(Args, Debug)]
pub struct CensorCommand {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write censored output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Mask characters, cycled to each offending word's length.
    #[arg(long, short = 'r', default_value = "*")]
    pub replacement: String,

    /// Process stdin line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered")]
    pub line_buffered: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "text")]
    pub input_file: Option<PathBuf>,

    /// Print the located violation as JSON.
    #[arg(long)]
    pub json: bool,

    /// Text to check; stdin is read when neither this nor --input-file is given.
    pub text: Option<String>,
}
