//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::{ColoredString, Colorize};

/// Format a value as a left-aligned field of at least `width` characters.
///
/// Values longer than `width` are kept whole, followed by a single space so
/// columns never run together.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();

    if value_str.len() >= width {
        format!("{value_str} ")
    } else {
        format!("{value_str:<width$}")
    }
}

/// Section banner, e.g. `----- Subnet Details -----`.
pub fn heading(title: &str) -> ColoredString {
    format!("----- {title} -----").bold().cyan()
}
