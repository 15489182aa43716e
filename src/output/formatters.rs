//! Formatting utilities for terminal output

use crate::analysis::WordPair;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a pair as `first + second`, quoting empty entries
#[must_use]
pub fn format_pair(pair: &WordPair<'_>) -> String {
    format!(
        "{} + {}",
        display_word(pair.first.text()),
        display_word(pair.second.text())
    )
}

/// Show an empty entry as `""` so it stays visible
#[must_use]
pub fn display_word(text: &str) -> String {
    if text.is_empty() {
        "\"\"".to_string()
    } else {
        text.to_string()
    }
}
