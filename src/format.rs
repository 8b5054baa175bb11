//! Currency formatting for display.
//!
//! Amounts are rendered the way an `en-IN` locale shows rupees: the last
//! three integer digits form one group and the remaining digits are grouped
//! in pairs (`12,34,567`). At most two fraction digits are shown and
//! trailing fractional zeros are dropped.

use rust_decimal::Decimal;

use crate::calculation::round_currency;

/// The rupee sign prefixed to formatted amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats `amount` as an Indian-grouped rupee string.
///
/// # Examples
///
/// ```
/// use salary_engine::format::format_inr;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_inr(Decimal::from(950_000)), "₹ 9,50,000");
/// assert_eq!(
///     format_inr(Decimal::from_str("79166.6666").unwrap()),
///     "₹ 79,166.67"
/// );
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_currency(amount).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = format!("{} {}{}", CURRENCY_SYMBOL, sign, group_indian(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amounts_are_ungrouped() {
        assert_eq!(format_inr(dec("0")), "₹ 0");
        assert_eq!(format_inr(dec("7")), "₹ 7");
        assert_eq!(format_inr(dec("999")), "₹ 999");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_inr(dec("1000")), "₹ 1,000");
        assert_eq!(format_inr(dec("25000")), "₹ 25,000");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(format_inr(dec("950000")), "₹ 9,50,000");
        assert_eq!(format_inr(dec("1710000")), "₹ 17,10,000");
        assert_eq!(format_inr(dec("123456789")), "₹ 12,34,56,789");
    }

    #[test]
    fn test_fraction_rounded_to_two_places() {
        assert_eq!(format_inr(dec("79166.666666")), "₹ 79,166.67");
        assert_eq!(format_inr(dec("1234.005")), "₹ 1,234.01");
    }

    #[test]
    fn test_trailing_fraction_zeros_dropped() {
        assert_eq!(format_inr(dec("142500.00")), "₹ 1,42,500");
        assert_eq!(format_inr(dec("1500.50")), "₹ 1,500.5");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_inr(dec("-1234567.5")), "₹ -12,34,567.5");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_inr(dec("-0.001")), "₹ 0");
    }
}
