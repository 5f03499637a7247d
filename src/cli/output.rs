//! Output formatting
//!
//! This module provides utilities for displaying colored status output and
//! formatted messages to the user, plus the global output mode (quiet/json)
//! applied from the CLI flags.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicU8 = AtomicU8::new(0);

/// Global output configuration from CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    quiet: bool,
    json: bool,
    verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Apply this configuration process-wide
    pub fn apply_global(&self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
        VERBOSE.store(self.verbose, Ordering::Relaxed);
    }
}

/// Whether `--quiet` is active
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether `--json` is active
pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

/// Verbosity level from repeated `-v` flags
pub fn verbosity() -> u8 {
    VERBOSE.load(Ordering::Relaxed)
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print an informational message (suppressed in quiet/json mode)
pub fn print_info(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a success message (suppressed in quiet/json mode)
pub fn print_success(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print a warning message (suppressed in quiet/json mode)
pub fn print_warning(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::WARNING);
    }
}

/// Print an indented detail line (suppressed in quiet/json mode)
pub fn print_detail(message: &str) {
    if !is_quiet() && !is_json() {
        println!("    {message}");
    }
}

/// Display a fatal error on stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error:#}", status::ERROR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_global_sets_flags() {
        OutputConfig::new(false, false, 2).apply_global();

        assert!(!is_quiet());
        assert!(!is_json());
        assert_eq!(verbosity(), 2);
    }
}
