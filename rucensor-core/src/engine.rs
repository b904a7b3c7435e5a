// rucensor-core/src/engine.rs
//! Defines the core `ProfanityFilter` trait.
//!
//! The trait decouples consumers (the CLI, headless helpers, embedding
//! applications) from a concrete engine. All three operations are total:
//! they never fail, whatever the input.
//!
//! License: MIT OR APACHE 2.0

use crate::config::Variant;
use crate::violation::Violation;

/// The contract every profanity engine adheres to.
pub trait ProfanityFilter: Send + Sync {
    /// Returns `true` as soon as any token of `text` is a violation.
    fn contains_violation(&self, text: &str) -> bool;

    /// Replaces every violating token with `replacement`, repeated to the
    /// token's character length. Whitespace and clean tokens are kept verbatim.
    ///
    /// # Arguments
    /// * `text` - The input to censor.
    /// * `replacement` - The mask characters; an empty string falls back to `*`.
    fn censor(&self, text: &str, replacement: &str) -> String;

    /// Reports the first violation with its canonical fragment instead of masking it.
    fn locate_violation(&self, text: &str) -> Violation;

    /// The variant the engine was constructed with.
    fn variant(&self) -> Variant;
}
