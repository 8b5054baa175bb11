//! Raw input parsing.
//!
//! Callers such as a form or an HTTP body supply salary figures as text. This
//! module turns that text into a validated [`SalaryInput`], rejecting anything
//! that is not a plain number with [`EngineError::InvalidInput`].

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryInput;

const CURRENCY_SYMBOL: char = '₹';

/// Parses one numeric field.
///
/// Surrounding whitespace, a leading `₹` and `,` / `_` digit-group
/// separators are accepted. Both plain (`1250000.50`) and scientific
/// (`1.25e6`) notation parse.
pub fn parse_amount(field: &str, raw: &str) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(trimmed)
        .trim_start();

    if trimmed.is_empty() {
        return Err(EngineError::invalid_input(field, "a value is required"));
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',' && *c != '_').collect();

    Decimal::from_str(&cleaned)
        .ok()
        .or_else(|| parse_scientific(&cleaned))
        .ok_or_else(|| {
            EngineError::invalid_input(field, format!("'{}' is not a number", raw.trim()))
        })
}

/// Largest exponent a `Decimal` can express.
const MAX_EXPONENT: u32 = 28;

fn parse_scientific(text: &str) -> Option<Decimal> {
    let (_, exponent) = text.split_once(['e', 'E'])?;
    let exponent: i32 = exponent.parse().ok()?;
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return None;
    }
    Decimal::from_scientific(text).ok()
}

/// Parses raw form values into a [`SalaryInput`].
///
/// The salary must be a non-negative number. The provident fund percentage,
/// when present and non-blank, must be a number; its range is checked later
/// by the calculation.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::parse_salary_input;
/// use rust_decimal::Decimal;
///
/// let input = parse_salary_input("12,00,000", true, Some("12")).unwrap();
/// assert_eq!(input.gross_annual_salary, Decimal::from(1_200_000));
/// assert_eq!(input.pf_percentage, Some(Decimal::from(12)));
///
/// assert!(parse_salary_input("twelve lakh", false, None).is_err());
/// ```
pub fn parse_salary_input(
    raw_salary: &str,
    include_gratuity: bool,
    raw_pf_percentage: Option<&str>,
) -> EngineResult<SalaryInput> {
    let gross_annual_salary = parse_amount("gross_annual_salary", raw_salary)?;
    if gross_annual_salary.is_sign_negative() && !gross_annual_salary.is_zero() {
        return Err(EngineError::invalid_input(
            "gross_annual_salary",
            format!("must not be negative, got {}", raw_salary.trim()),
        ));
    }

    let pf_percentage = match raw_pf_percentage {
        Some(raw) if !raw.trim().is_empty() => Some(parse_amount("pf_percentage", raw)?),
        _ => None,
    };

    Ok(SalaryInput {
        gross_annual_salary,
        include_gratuity,
        pf_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn expect_invalid(result: EngineResult<SalaryInput>, expected_field: &str) {
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput for {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_plain_number() {
        let input = parse_salary_input("1000000", false, None).unwrap();

        assert_eq!(input.gross_annual_salary, dec("1000000"));
        assert!(!input.include_gratuity);
        assert!(input.pf_percentage.is_none());
    }

    #[test]
    fn test_decimal_with_whitespace() {
        let input = parse_salary_input("  850000.75 \n", true, None).unwrap();

        assert_eq!(input.gross_annual_salary, dec("850000.75"));
        assert!(input.include_gratuity);
    }

    #[test]
    fn test_grouping_separators_and_symbol() {
        assert_eq!(
            parse_salary_input("₹ 9,50,000", false, None)
                .unwrap()
                .gross_annual_salary,
            dec("950000")
        );
        assert_eq!(
            parse_salary_input("1_500_000", false, None)
                .unwrap()
                .gross_annual_salary,
            dec("1500000")
        );
    }

    #[test]
    fn test_scientific_notation() {
        let input = parse_salary_input("1.2e6", false, None).unwrap();

        assert_eq!(input.gross_annual_salary, dec("1200000"));
    }

    #[test]
    fn test_out_of_range_exponent_is_invalid() {
        expect_invalid(
            parse_salary_input("1.5e-4294967295", false, None),
            "gross_annual_salary",
        );
        expect_invalid(parse_salary_input("1e40", false, None), "gross_annual_salary");
    }

    #[test]
    fn test_non_numeric_salary_is_invalid() {
        expect_invalid(
            parse_salary_input("ten lakh", false, None),
            "gross_annual_salary",
        );
        expect_invalid(
            parse_salary_input("100000abc", false, None),
            "gross_annual_salary",
        );
        expect_invalid(parse_salary_input("NaN", false, None), "gross_annual_salary");
        expect_invalid(
            parse_salary_input("Infinity", false, None),
            "gross_annual_salary",
        );
    }

    #[test]
    fn test_empty_salary_is_invalid() {
        expect_invalid(parse_salary_input("", false, None), "gross_annual_salary");
        expect_invalid(parse_salary_input("   ", false, None), "gross_annual_salary");
    }

    #[test]
    fn test_negative_salary_is_invalid() {
        expect_invalid(
            parse_salary_input("-50000", false, None),
            "gross_annual_salary",
        );
    }

    #[test]
    fn test_pf_percentage_parsed() {
        let input = parse_salary_input("1000000", false, Some(" 8.5 ")).unwrap();

        assert_eq!(input.pf_percentage, Some(dec("8.5")));
    }

    #[test]
    fn test_blank_pf_percentage_means_none() {
        let input = parse_salary_input("1000000", false, Some("")).unwrap();

        assert!(input.pf_percentage.is_none());
    }

    #[test]
    fn test_out_of_range_pf_is_not_rejected_here() {
        let input = parse_salary_input("1000000", false, Some("20")).unwrap();

        assert_eq!(input.pf_percentage, Some(dec("20")));
    }

    #[test]
    fn test_non_numeric_pf_is_invalid() {
        expect_invalid(
            parse_salary_input("1000000", false, Some("twelve")),
            "pf_percentage",
        );
    }

    #[test]
    fn test_error_message_quotes_raw_value() {
        let err = parse_amount("gross_annual_salary", " abc ").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid input for 'gross_annual_salary': 'abc' is not a number"
        );
    }
}
