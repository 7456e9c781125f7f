//! Terminal output for the assetsuite CLI.
//!
//! Cargo-style status lines with a right-aligned coloured verb, written to
//! stderr. Colour is used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Status printer for CLI commands.
pub struct Printer {
    color: bool,
    verbose: bool,
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
            verbose: false,
        }
    }

    /// Also print `verbose` lines.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// e.g. "     Reading appearances.json"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Detail line, shown only with `--verbose`.
    pub fn verbose(&self, verb: &str, message: &str) {
        if self.verbose {
            self.print_line(CYAN, verb, message);
        }
    }

    /// Severity label, red for errors and yellow otherwise.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// `plural(1, "sprite", "sprites")` → "1 sprite".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            return if s.is_empty() { ".".to_string() } else { s };
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "sheet", "sheets"), "1 sheet");
        assert_eq!(plural(0, "sheet", "sheets"), "0 sheets");
        assert_eq!(plural(12, "sprite", "sprites"), "12 sprites");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/assets/items.sheet");
        assert_eq!(display_path(p), "/nonexistent/assets/items.sheet");
    }

    #[test]
    fn test_severity_without_colour() {
        let printer = Printer {
            color: false,
            verbose: false,
        };
        assert_eq!(printer.severity("error", true), "error");
    }
}
