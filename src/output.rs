//! Terminal output for the incscan CLI.
//!
//! Cargo-style status lines: a right-aligned coloured verb followed by the
//! message. Everything goes to stderr; the JSON document goes to a file.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// The status verbs a run can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The include directory being walked.
    Scanning,
    /// One file being parsed.
    Parsing,
    /// A file that could not be read; the run continues.
    Failed,
    /// A lint diagnostic.
    Warning,
    /// Help text following a lint diagnostic.
    Help,
    /// Entry and file totals.
    Finished,
    /// The output file.
    Wrote,
    /// A run-ending problem such as a missing include directory.
    Error,
}

impl Status {
    pub fn verb(self) -> &'static str {
        match self {
            Status::Scanning => "Scanning",
            Status::Parsing => "Parsing",
            Status::Failed => "Failed",
            Status::Warning => "warning",
            Status::Help => "help",
            Status::Finished => "Finished",
            Status::Wrote => "Wrote",
            Status::Error => "error",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Status::Scanning => CYAN,
            Status::Parsing | Status::Finished | Status::Wrote => GREEN,
            Status::Warning | Status::Help => YELLOW,
            Status::Failed | Status::Error => RED,
        }
    }
}

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. A silent printer drops
/// every line.
pub struct Printer {
    color: bool,
    silent: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            silent: false,
        }
    }

    /// A printer that discards everything (library callers, tests).
    pub fn silent() -> Self {
        Self {
            color: false,
            silent: true,
        }
    }

    /// Print one status line, e.g. `     Parsing include/clients.inc`.
    pub fn emit(&self, status: Status, message: &str) {
        if self.silent {
            return;
        }
        let _ = writeln!(io::stderr().lock(), "{}", self.format_line(status, message));
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn format_line(&self, status: Status, message: &str) -> String {
        let verb = status.verb();
        if self.color {
            let color = status.color();
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

/// Pluralize a count: `plural(1, "entry", "entries")` → "1 entry".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return path.display().to_string();
    };
    match path.strip_prefix(&cwd) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
