// rucensor/src/commands/censor.rs
//! The `censor` command: masks offending words and writes the result.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Write};

use rucensor_core::ProfanityFilter;

use super::{build_censor, read_input};
use crate::cli::CensorCommand;

pub fn run_censor(cmd: &CensorCommand) -> Result<()> {
    info!("Starting censor operation.");
    let censor = build_censor(&cmd.engine)?;

    if cmd.line_buffered {
        if cmd.input_file.is_some() || cmd.output.is_some() {
            bail!("--line-buffered works only between stdin and stdout");
        }
        return run_line_buffered(&censor, cmd);
    }

    let input = read_input(cmd.input_file.as_deref(), cmd.engine.max_input_bytes)?;
    let censored = censor.censor(&input, &cmd.replacement);
    debug!(
        "Censored {} chars of input ({} changed).",
        input.chars().count(),
        input.chars().zip(censored.chars()).filter(|(a, b)| a != b).count()
    );

    match &cmd.output {
        Some(path) => {
            info!("Writing censored content to file: {}", path.display());
            fs::write(path, censored.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(censored.as_bytes())?;
            writer.flush()?;
        }
    }

    info!("Censor operation completed.");
    Ok(())
}

fn run_line_buffered(censor: &dyn ProfanityFilter, cmd: &CensorCommand) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut line = String::new();
    let mut number = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read line from stdin")?;
        if read == 0 {
            break;
        }
        number += 1;
        if read > cmd.engine.max_input_bytes {
            bail!(
                "Line {} exceeds the {} byte limit (see --max-input-bytes)",
                number,
                cmd.engine.max_input_bytes
            );
        }
        // Whitespace tokens pass through `censor` untouched, so the line keeps its terminator.
        writer.write_all(censor.censor(&line, &cmd.replacement).as_bytes())?;
        writer.flush()?;
    }
    Ok(())
}
