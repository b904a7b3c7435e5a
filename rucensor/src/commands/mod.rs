// rucensor/src/commands/mod.rs
//! Command implementations and the engine setup they share.

pub mod censor;
pub mod check;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use rucensor_core::{PatternLibrary, RuCensor, Variant};

use crate::cli::EngineArgs;

/// Builds a `RuCensor` from the shared engine flags.
///
/// The user library, if any, is merged over the built-in one before the
/// `--no-default-*` flags and the repeatable `--deny`/`--allow` patterns apply.
pub fn build_censor(args: &EngineArgs) -> Result<RuCensor> {
    let variant: Variant = args.variant.into();
    let defaults = PatternLibrary::load_default()?;
    let user = match &args.library {
        Some(path) => Some(PatternLibrary::load_from_file(path)?),
        None => None,
    };
    let library = PatternLibrary::merge(defaults, user);

    let mut censor = RuCensor::with_library(variant, library)
        .context("Failed to compile pattern library")?;

    if args.no_default_deny {
        censor.clear_deny_patterns();
    }
    if args.no_default_allow {
        censor.clear_allow_patterns();
    }
    for pattern in &args.deny {
        censor
            .add_deny_pattern(pattern)
            .with_context(|| format!("Rejected --deny pattern '{}'", pattern))?;
    }
    for pattern in &args.allow {
        censor
            .add_allow_pattern(pattern)
            .with_context(|| format!("Rejected --allow pattern '{}'", pattern))?;
    }

    info!(
        "Engine ready: variant {}, {} deny rules, {} allow patterns.",
        variant,
        censor.deny_patterns().len(),
        censor.allow_patterns().len()
    );
    Ok(censor)
}

/// Reads the whole input from `path` or stdin, refusing more than `max_bytes`.
pub fn read_input(path: Option<&Path>, max_bytes: usize) -> Result<String> {
    let mut buf = Vec::new();
    let limit = (max_bytes as u64).saturating_add(1);
    match path {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            file.take(limit)
                .read_to_end(&mut buf)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        }
        None => {
            io::stdin()
                .lock()
                .take(limit)
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
        }
    }
    if buf.len() > max_bytes {
        bail!("Input exceeds the {} byte limit (see --max-input-bytes)", max_bytes);
    }
    debug!("Read {} bytes of input.", buf.len());
    String::from_utf8(buf).context("Input is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{VariantArg, DEFAULT_MAX_INPUT_BYTES};
    use rucensor_core::ProfanityFilter;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn engine_args(variant: VariantArg) -> EngineArgs {
        EngineArgs {
            variant,
            library: None,
            deny: Vec::new(),
            allow: Vec::new(),
            no_default_deny: false,
            no_default_allow: false,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    #[test]
    fn test_build_censor_applies_flags() -> Result<()> {
        let mut args = engine_args(VariantArg::Strict);
        args.no_default_deny = true;
        args.deny.push("синица".to_string());
        let censor = build_censor(&args)?;
        assert!(censor.contains_violation("синица"));
        assert!(!censor.contains_violation("xyйня"));
        Ok(())
    }

    #[test]
    fn test_build_censor_rejects_invalid_pattern() {
        let mut args = engine_args(VariantArg::Normal);
        args.allow.push("invalid[".to_string());
        let err = build_censor(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("--allow"));
    }

    #[test]
    fn test_read_input_enforces_limit() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all("привет".as_bytes())?;
        assert_eq!(read_input(Some(file.path()), 64)?, "привет");
        assert!(read_input(Some(file.path()), 4).is_err());
        Ok(())
    }
}
