//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and line prompting.

use std::io::{self, BufRead, IsTerminal, Write};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stdout_tty() -> bool {
    io::stdout().is_terminal()
}

pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && is_stdout_tty()
}

/// Read one line after printing `message` to stderr.
///
/// Only the line terminator is stripped; leading and trailing spaces are part
/// of the input. Returns `None` at end of input.
pub fn prompt(message: &str) -> findreplace::Result<Option<String>> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line).map_err(|e| {
        findreplace::Error::internal_io(e.to_string(), Some("read input".to_string()))
    })?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(strip_line_ending(&line).to_string()))
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
