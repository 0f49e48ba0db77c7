//! Formatting utilities for terminal output

/// Format a probability as a percentage with adaptive precision
///
/// Small chances keep enough digits to stay distinguishable from zero.
#[must_use]
pub fn format_probability(probability: f64) -> String {
    let percent = probability * 100.0;
    if percent >= 1.0 {
        format!("{percent:.2}%")
    } else if percent >= 0.01 {
        format!("{percent:.4}%")
    } else {
        format!("{percent:.2e}%")
    }
}

/// Format an attempt or currency count, showing saturated values as infinity
#[must_use]
pub fn format_count(count: u64) -> String {
    if count == u64::MAX {
        "∞".to_string()
    } else {
        count.to_string()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a probability in [0, 1]
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 1.0, width)
}
