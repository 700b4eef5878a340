//! Centralized formatting for demo output.
//!
//! This module provides one way to render section headers, outcome
//! markers, and narration so the demo commands stay consistent.

use colored::Colorize;

/// A bold section title over a rule of matching width.
pub fn section(title: &str) -> String {
    format!(
        "{}\n{}",
        title.bold(),
        format::separator(title.chars().count())
    )
}

/// Green check for an outcome that holds.
pub fn pass(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Red cross for an outcome that does not hold, or an operation a device
/// cannot honor.
pub fn fail(text: &str) -> String {
    format!("{} {}", "✗".red(), text)
}

/// Dimmed bullet for narration between outcomes.
pub fn note(text: &str) -> String {
    format!("{} {}", "•".dimmed(), text)
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
