//! Formatting utilities for display values.

use crate::config::NO_DESCRIPTION_FALLBACK;

/// Format a star/fork count for display (e.g., "1.2k", "3.4M").
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Description text for a result card, with a fallback for repositories
/// that have none.
pub fn description_or_fallback(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => NO_DESCRIPTION_FALLBACK.to_string(),
    }
}
