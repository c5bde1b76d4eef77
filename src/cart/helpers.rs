//! Shopping Cart Helpers
//!
//! Formatting helpers for cart contents.

use super::models::CartLine;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Golden Sun, 1x Violet Night"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.artwork.title))
        .collect::<Vec<_>>()
        .join(", ")
}
