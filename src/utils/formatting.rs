//! Formatting utilities used for the report and sample outputs.

use unicode_width::UnicodeWidthStr;

/// Width of the separator printed after each section.
pub const RULE_WIDTH: usize = 40;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Round to 2 decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Print a rounded value the way the reports show it: whole numbers keep a
/// trailing ".0", anything else uses the shortest exact form.
pub fn decimal(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// Pad with spaces up to `width` display columns (station names may carry
/// non-ASCII characters).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Join sentence fragments as "a, b and c".
pub fn join_with_and(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
