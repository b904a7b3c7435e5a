// rucensor-core/src/headless.rs
//! Convenience wrappers for one-shot, non-interactive use.
//!
//! Each call builds a fresh engine, so these helpers suit scripts and tests
//! rather than hot paths. Long-lived callers should construct a
//! [`RuCensor`] once and reuse it.

use anyhow::{Context, Result};

use crate::config::{PatternLibrary, Variant};
use crate::engine::ProfanityFilter;
use crate::engines::ru_censor::RuCensor;

fn build_engine(variant: Variant, library: Option<PatternLibrary>) -> Result<RuCensor> {
    match library {
        Some(library) => RuCensor::with_library(variant, library)
            .context("Failed to compile pattern library for RuCensor"),
        None => Ok(RuCensor::new(variant)),
    }
}

/// Censors `content` in a single call.
///
/// # Arguments
///
/// * `variant` - Which built-in root lists to use.
/// * `library` - A custom library; `None` selects the built-in one.
/// * `content` - The text to censor.
/// * `replacement` - The mask characters.
pub fn headless_censor_string(
    variant: Variant,
    library: Option<PatternLibrary>,
    content: &str,
    replacement: &str,
) -> Result<String> {
    let engine = build_engine(variant, library)?;
    Ok(engine.censor(content, replacement))
}

/// Checks `content` for violations in a single call.
pub fn headless_contains_violation(
    variant: Variant,
    library: Option<PatternLibrary>,
    content: &str,
) -> Result<bool> {
    let engine = build_engine(variant, library)?;
    Ok(engine.contains_violation(content))
}
