//! # Shared Utility Functions
//!
//! Number formatting used by the terminal screens and its tests.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_billions, format_number};
//!
//! assert_eq!(format_billions(61_234_567_890.0), "$61.23B");
//! assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
//! ```

/// Format a USD amount in billions with two decimals (e.g. `$61.23B`).
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_billions;
///
/// assert_eq!(format_billions(0.0), "$0.00B");
/// assert_eq!(format_billions(2_500_000_000.0), "$2.50B");
/// ```
pub fn format_billions(value: f64) -> String {
    format!("${:.2}B", value / 1e9)
}

/// Format a number with comma thousands separators (e.g. `1234567.89` -> `"1,234,567.89"`).
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}
