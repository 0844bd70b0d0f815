//! Indian-locale currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// The rupee sign.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount in rupees with Indian digit grouping.
///
/// Always shows two decimal places, rounding half away from zero. Negative
/// amounts put the minus sign before the symbol.
///
/// # Examples
///
/// ```
/// use salary_engine::message::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1234567890, 2)), "₹1,23,45,678.90");
/// assert_eq!(format_currency(Decimal::new(-5, 0)), "-₹5.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let (negative, body) = grouped_parts(value);
    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        body
    )
}

/// Formats an amount with Indian digit grouping and no symbol.
pub fn format_number(value: Decimal) -> String {
    let (negative, body) = grouped_parts(value);
    if negative { format!("-{}", body) } else { body }
}

fn grouped_parts(value: Decimal) -> (bool, String) {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    (negative, format!("{}.{}", group_indian(integer), fraction))
}

/// Groups the last three digits, then every two digits before them.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
