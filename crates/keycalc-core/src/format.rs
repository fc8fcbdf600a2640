//! Display number formatting
//!
//! Converts between the text shown on the calculator display and `f64`.
//! Decimal style, `.` separator, no grouping, a bounded number of fraction
//! digits.

/// Decimal separator used on the display
pub const DECIMAL_SEPARATOR: char = '.';

/// Formatter/parser for the display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Maximum digits printed after the separator
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    /// Formatter printing at most `max_fraction_digits` fraction digits
    pub fn new(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
        }
    }

    /// Format a value for display
    ///
    /// Rounds to `max_fraction_digits`, trims trailing zeros and a dangling
    /// separator, and prints negative zero as `0`.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let mut text = format!("{:.*}", self.max_fraction_digits, value);

        if text.contains(DECIMAL_SEPARATOR) {
            let trimmed = text
                .trim_end_matches('0')
                .trim_end_matches(DECIMAL_SEPARATOR)
                .len();
            text.truncate(trimmed);
        }

        if text == "-0" {
            text = "0".to_string();
        }

        text
    }

    /// Parse display text
    ///
    /// Accepts an optional leading `-`, digits and at most one separator, with
    /// at least one digit (`12`, `12.`, `.5`). Exponents, grouping and words
    /// such as `inf` are rejected.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let digits = text.strip_prefix('-').unwrap_or(text);

        let mut seen_separator = false;
        let mut seen_digit = false;
        for ch in digits.chars() {
            match ch {
                '0'..='9' => seen_digit = true,
                DECIMAL_SEPARATOR if !seen_separator => seen_separator = true,
                _ => return None,
            }
        }

        if !seen_digit {
            return None;
        }

        text.parse().ok()
    }
}
