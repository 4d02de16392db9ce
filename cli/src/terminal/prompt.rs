//! Line-oriented prompting for the interactive session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::bail;
use colored::*;

use crate::terminal::colors;

/// Prints `label`, then reads and trims one line from stdin.
///
/// Errors only when the input stream is closed or unreadable; an empty
/// answer comes back as an empty string.
pub fn read_line(label: &str) -> anyhow::Result<String> {
    print!("{} ", label.color(colors::PRIMARY));
    io::stdout().flush()?;

    let mut buf = String::new();
    let read = io::stdin().lock().read_line(&mut buf)?;
    if read == 0 {
        bail!("input stream closed");
    }

    Ok(buf.trim().to_string())
}

/// Parses a prompted answer as a number.
///
/// `None` marks driver-level validation failure; the caller aborts the
/// current command with its own message and the core never sees the
/// value.
pub fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}
