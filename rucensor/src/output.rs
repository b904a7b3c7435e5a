// rucensor/src/output.rs
//! Colored status lines for terminal output.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

/// Kind of a status line; decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clean,
    Violation,
    Error,
}

impl Status {
    fn color(self) -> AnsiColors {
        match self {
            Status::Clean => AnsiColors::Green,
            Status::Violation => AnsiColors::Red,
            Status::Error => AnsiColors::BrightRed,
        }
    }
}

/// Writes `msg` followed by a newline, colored when `supports_color` is set.
pub fn print_status<W: Write>(
    writer: &mut W,
    msg: &str,
    status: Status,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.color(status.color()))
    } else {
        writeln!(writer, "{}", msg)
    }
}
