//! errors.rs - Custom error types for the rucensor-core library.
//!
//! Pattern validation is the only fallible operation of the engine itself:
//! matching and masking are total over their input. Loading a pattern
//! library from disk reports through `anyhow` instead (see `config`).
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types raised by the `rucensor-core` engine.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CensorError {
    /// A deny or allow pattern was empty, too long, or failed to compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl CensorError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        CensorError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`CensorError::InvalidPattern`].
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, CensorError::InvalidPattern { .. })
    }
}
