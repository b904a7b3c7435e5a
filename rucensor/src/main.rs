// rucensor/src/main.rs
//! RuCensor entry point.
//!
//! Exit status: 0 on success or clean input, 1 when `check` finds a
//! violation, 2 on any error.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use rucensor::cli::{Cli, Commands};
use rucensor::logger;
use rucensor::output::{print_status, Status};
use rucensor::{run_censor, run_check};

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            let stderr_supports_color = io::stderr().is_terminal();
            let _ = print_status(
                &mut io::stderr(),
                &format!("Error: {:#}", e),
                Status::Error,
                stderr_supports_color,
            );
            ExitCode::from(2)
        }
    }
}

fn run(args: &Cli) -> Result<ExitCode> {
    match &args.command {
        Commands::Censor(cmd) => {
            run_censor(cmd)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(cmd) => {
            if run_check(cmd)? {
                Ok(ExitCode::from(1))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
