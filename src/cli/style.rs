//! Terminal styling helpers
//!
//! Colors are always applied; `anstream` strips them when the output stream
//! does not support ANSI.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark for finished tasks
pub const CHECK: &str = "✓";
/// Cross for failed tasks
pub const CROSS: &str = "✗";
/// Prefix for informational lines
pub const INFO: &str = "ℹ";
/// Prefix for warnings
pub const WARN: &str = "⚠";
/// Prefix for plan steps
pub const ARROW: &str = "→";

/// Semantic styles for console text
pub trait Stylize {
    /// De-emphasized text
    fn muted(&self) -> String;
    /// Branch names and other values
    fn accent(&self) -> String;
    /// Success text
    fn success(&self) -> String;
    /// Warning text
    fn warn(&self) -> String;
    /// Error text
    fn error(&self) -> String;
    /// Section headers
    fn header(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.bright_black().to_string()
    }

    fn accent(&self) -> String {
        self.yellow().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().to_string()
    }

    fn header(&self) -> String {
        self.bold().blue().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Red cross
pub fn cross() -> String {
    CROSS.error()
}

/// Blue info marker
pub fn info() -> String {
    INFO.blue().to_string()
}

/// Yellow warning marker
pub fn warning() -> String {
    WARN.warn()
}

/// Cyan step arrow
pub fn arrow() -> String {
    ARROW.cyan().to_string()
}

/// Style for task spinners
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}
