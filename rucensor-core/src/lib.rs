// rucensor-core/src/lib.rs
//! # RuCensor Core Library
//!
//! `rucensor-core` detects and masks Russian profanity that has been
//! deliberately obfuscated: Latin look-alikes, digits standing in for
//! letters, stretched letters and inserted separators.
//!
//! Text is split into word and whitespace tokens. Each word is checked
//! against the allow-list, then normalized to a canonical form and matched
//! against one compiled alternation of obscene roots, most of which may be
//! preceded by a Russian prefix.
//!
//! ## Modules
//!
//! * `charmap`: The look-alike table and per-character folding.
//! * `normalizer`: Canonical form of a token.
//! * `prefixes`: The prefix alternation shared by prefixable roots.
//! * `config`: `PatternLibrary`, `PatternRule`, `Variant` and `EngineOptions`.
//! * `compiler`: Rule expansion, validation and regex compilation.
//! * `tokens`: Whitespace-preserving tokenization.
//! * `engine`: The `ProfanityFilter` trait.
//! * `engines`: Concrete implementations of `ProfanityFilter`.
//! * `violation`: The `Violation` report type.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The `CensorError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use rucensor_core::{ProfanityFilter, RuCensor, Variant};
//!
//! let mut censor = RuCensor::new(Variant::Strict);
//! assert!(censor.contains_violation("Это xyйня текст"));
//! assert_eq!(censor.censor("Это xyйня текст", "*"), "Это ***** текст");
//!
//! censor.add_deny_pattern("синица").unwrap();
//! assert!(censor.contains_violation("Это синица"));
//! assert!(censor.add_deny_pattern("invalid[").is_err());
//! ```
//!
//! ## Error Handling
//!
//! Engine mutations return [`CensorError::InvalidPattern`] for empty,
//! oversized or unparsable patterns. Loading a pattern library from disk
//! reports through `anyhow::Error`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod charmap;
pub mod compiler;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod normalizer;
pub mod prefixes;
pub mod tokens;
pub mod violation;

/// Re-exports the configuration types for pattern libraries and engine variants.
pub use config::{
    EngineOptions, PatternLibrary, PatternRule, PrefixMode, Variant, DEFAULT_BACKTRACK_LIMIT,
    MAX_PATTERN_LENGTH,
};

pub use errors::CensorError;

pub use engine::ProfanityFilter;
pub use engines::ru_censor::{RuCensor, DEFAULT_REPLACEMENT};

pub use violation::Violation;

pub use normalizer::normalize;
pub use prefixes::prefix_alternation;

pub use headless::{headless_censor_string, headless_contains_violation};
