// rucensor/src/commands/check.rs
//! The `check` command: reports the first offending word, if any.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use rucensor_core::{ProfanityFilter, Violation};

use super::{build_censor, read_input};
use crate::cli::CheckCommand;
use crate::output::{print_status, Status};

/// Runs the check and returns whether a violation was found.
pub fn run_check(cmd: &CheckCommand) -> Result<bool> {
    let censor = build_censor(&cmd.engine)?;

    let input = match &cmd.text {
        Some(text) => {
            if text.len() > cmd.engine.max_input_bytes {
                anyhow::bail!(
                    "Input exceeds the {} byte limit (see --max-input-bytes)",
                    cmd.engine.max_input_bytes
                );
            }
            text.clone()
        }
        None => read_input(cmd.input_file.as_deref(), cmd.engine.max_input_bytes)?,
    };

    let violation = censor.locate_violation(&input);
    info!("Check finished: violation found = {}.", violation.found);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.json {
        let json = serde_json::to_string_pretty(&violation)
            .context("Failed to serialize violation")?;
        writeln!(writer, "{}", json)?;
    } else {
        print_status(&mut writer, &describe(&violation), status_of(&violation), supports_color)?;
    }
    writer.flush()?;

    Ok(violation.found)
}

fn status_of(violation: &Violation) -> Status {
    if violation.found {
        Status::Violation
    } else {
        Status::Clean
    }
}

fn describe(violation: &Violation) -> String {
    if !violation.found {
        return "clean".to_string();
    }
    match (&violation.token, &violation.original) {
        (Some(token), Some(original)) => format!(
            "violation: '{}' in word '{}' (matched '{}')",
            original, token, violation.fragment
        ),
        (Some(token), None) => {
            format!("violation: word '{}' (matched '{}')", token, violation.fragment)
        }
        _ => format!("violation: matched '{}'", violation.fragment),
    }
}
