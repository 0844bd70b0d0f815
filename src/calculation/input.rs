//! Operator input parsing.
//!
//! Calculators work on the raw text an operator typed. These helpers turn that
//! text into decimals and normalize mobile numbers.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a decimal amount, returning `None` for blank or unparsable text.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal(" 4209.50 "), Some(Decimal::new(420950, 2)));
/// assert_eq!(parse_decimal(""), None);
/// assert_eq!(parse_decimal("abc"), None);
/// ```
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Parses a decimal amount, treating blank or unparsable text as zero.
pub fn parse_amount(input: &str) -> Decimal {
    parse_decimal(input).unwrap_or(Decimal::ZERO)
}

/// Removes every whitespace character.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keeps only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns true if the number is exactly ten digits once whitespace is removed.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::is_valid_mobile;
///
/// assert!(is_valid_mobile("98765 43210"));
/// assert!(!is_valid_mobile("12345"));
/// assert!(!is_valid_mobile("98765-43210"));
/// ```
pub fn is_valid_mobile(input: &str) -> bool {
    let stripped = strip_whitespace(input);
    stripped.len() == 10 && stripped.chars().all(|c| c.is_ascii_digit())
}
