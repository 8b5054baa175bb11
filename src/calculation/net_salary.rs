//! Take-home salary calculation.
//!
//! This module ties the deduction and tax steps together: gross salary is
//! reduced by gratuity and provident fund to give taxable income, progressive
//! tax is charged on that, and what remains is the net annual salary.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;
use uuid::Uuid;

use crate::config::TaxRegime;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, SalaryBreakdown, SalaryInput, SalaryTotals};

use super::gratuity::calculate_gratuity;
use super::income_tax::calculate_income_tax;
use super::provident_fund::calculate_provident_fund;

/// Number of salary payments in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Rounds a monetary amount to two decimal places, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the take-home salary breakdown for `input` under `regime`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the gross salary is negative.
/// No partial breakdown is produced in that case.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_net;
/// use salary_engine::config::TaxRegime;
/// use salary_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SalaryInput::new(Decimal::from(1_000_000));
/// let breakdown = compute_net(&input, &TaxRegime::default()).unwrap();
///
/// assert_eq!(breakdown.net_annual(), Decimal::from(950_000));
/// assert_eq!(breakdown.net_monthly(), Decimal::from_str("79166.67").unwrap());
/// ```
pub fn compute_net(input: &SalaryInput, regime: &TaxRegime) -> EngineResult<SalaryBreakdown> {
    let start_time = Instant::now();
    let gross = input.gross_annual_salary;

    if gross.is_sign_negative() && !gross.is_zero() {
        return Err(EngineError::invalid_input(
            "gross_annual_salary",
            format!("must not be negative, got {}", gross),
        ));
    }

    let deductions_config = regime.deductions();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings = Vec::new();
    let mut deductions = Vec::new();
    let mut step_number: u32 = 1;

    let gratuity = calculate_gratuity(
        gross,
        input.include_gratuity,
        deductions_config.gratuity.rate,
        step_number,
    );
    audit_steps.push(gratuity.audit_step);
    deductions.extend(gratuity.deduction);
    step_number += 1;

    let provident_fund = calculate_provident_fund(
        gross,
        input.pf_percentage,
        &deductions_config.provident_fund,
        step_number,
    );
    audit_steps.push(provident_fund.audit_step);
    deductions.extend(provident_fund.deduction);
    warnings.extend(provident_fund.warning);
    step_number += 1;

    let taxable_income = gross - gratuity.amount - provident_fund.amount;

    let income_tax = calculate_income_tax(taxable_income, regime.brackets(), step_number);
    audit_steps.push(income_tax.audit_step);
    step_number += 1;

    let net_annual_salary = taxable_income - income_tax.total_tax;
    let net_monthly_salary = round_currency(net_annual_salary / Decimal::from(MONTHS_PER_YEAR));

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "total_tax": income_tax.total_tax.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_annual_salary": net_annual_salary.normalize().to_string(),
            "net_monthly_salary": net_monthly_salary.to_string()
        }),
        reasoning: format!(
            "{} - {} = {} per year; / {} = {} per month",
            taxable_income.normalize(),
            income_tax.total_tax.normalize(),
            net_annual_salary.normalize(),
            MONTHS_PER_YEAR,
            net_monthly_salary
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        gross = %gross,
        taxable_income = %taxable_income,
        total_tax = %income_tax.total_tax,
        net_annual = %net_annual_salary,
        duration_us,
        "Computed net salary"
    );

    Ok(SalaryBreakdown {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        regime_code: regime.metadata().code.clone(),
        input: input.clone(),
        deductions,
        tax_slabs: income_tax.slabs,
        totals: SalaryTotals {
            gross_annual_salary: gross,
            gratuity_deduction: gratuity.amount,
            pf_deduction: provident_fund.amount,
            taxable_income,
            total_tax: income_tax.total_tax,
            net_annual_salary,
            net_monthly_salary,
        },
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}

/// Computes the take-home salary under the built-in regime.
///
/// Returns `(net_annual, net_monthly)`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_net_default;
/// use rust_decimal::Decimal;
///
/// let (annual, _) = compute_net_default(Decimal::from(250_000), false, None).unwrap();
/// assert_eq!(annual, Decimal::from(250_000));
/// ```
pub fn compute_net_default(
    gross_annual_salary: Decimal,
    include_gratuity: bool,
    pf_percentage: Option<Decimal>,
) -> EngineResult<(Decimal, Decimal)> {
    let input = SalaryInput {
        gross_annual_salary,
        include_gratuity,
        pf_percentage,
    };
    let breakdown = compute_net(&input, &TaxRegime::default())?;
    Ok((breakdown.net_annual(), breakdown.net_monthly()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::PF_OUT_OF_RANGE_WARNING;
    use crate::models::DeductionType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn compute(input: SalaryInput) -> SalaryBreakdown {
        compute_net(&input, &TaxRegime::default()).unwrap()
    }

    #[test]
    fn test_salary_under_first_bracket_is_untaxed() {
        let breakdown = compute(SalaryInput::new(dec("300000")));

        assert_eq!(breakdown.totals.total_tax, Decimal::ZERO);
        assert_eq!(breakdown.net_annual(), dec("300000"));
        assert_eq!(breakdown.net_monthly(), dec("25000"));
    }

    #[test]
    fn test_one_million_no_deductions() {
        let breakdown = compute(SalaryInput::new(dec("1000000")));

        assert_eq!(breakdown.totals.taxable_income, dec("1000000"));
        assert_eq!(breakdown.totals.total_tax, dec("50000"));
        assert_eq!(breakdown.net_annual(), dec("950000"));
        assert_eq!(breakdown.net_monthly(), dec("79166.67"));
        assert!(breakdown.deductions.is_empty());
    }

    #[test]
    fn test_two_million_no_deductions() {
        let breakdown = compute(SalaryInput::new(dec("2000000")));

        assert_eq!(breakdown.totals.total_tax, dec("290000"));
        assert_eq!(breakdown.net_annual(), dec("1710000"));
        assert_eq!(breakdown.net_monthly(), dec("142500"));
    }

    #[test]
    fn test_gratuity_and_twelve_percent_pf_reduce_taxable_income() {
        let input = SalaryInput::new(dec("2000000"))
            .with_gratuity()
            .with_pf_percentage(dec("12"));
        let breakdown = compute(input);

        // 2,000,000 x (1 - 0.0491 - 0.12)
        assert_eq!(breakdown.totals.gratuity_deduction, dec("98200"));
        assert_eq!(breakdown.totals.pf_deduction, dec("240000"));
        assert_eq!(breakdown.totals.taxable_income, dec("1661800"));
        // 0.3 x 161,800 + 140,000
        assert_eq!(breakdown.totals.total_tax, dec("188540"));
        assert_eq!(breakdown.net_annual(), dec("1473260"));
        assert_eq!(breakdown.net_monthly(), dec("122771.67"));

        let kinds: Vec<DeductionType> = breakdown
            .deductions
            .iter()
            .map(|d| d.deduction_type)
            .collect();
        assert_eq!(
            kinds,
            vec![DeductionType::Gratuity, DeductionType::ProvidentFund]
        );
    }

    #[test]
    fn test_out_of_range_pf_is_ignored_with_warning() {
        let input = SalaryInput::new(dec("1000000")).with_pf_percentage(dec("15"));
        let breakdown = compute(input);

        assert_eq!(breakdown.totals.pf_deduction, Decimal::ZERO);
        assert_eq!(breakdown.net_annual(), dec("950000"));
        assert_eq!(breakdown.audit_trace.warnings.len(), 1);
        assert_eq!(breakdown.audit_trace.warnings[0].code, PF_OUT_OF_RANGE_WARNING);
    }

    #[test]
    fn test_zero_salary() {
        let breakdown = compute(SalaryInput::new(Decimal::ZERO).with_gratuity());

        assert_eq!(breakdown.net_annual(), Decimal::ZERO);
        assert_eq!(breakdown.net_monthly(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_salary_is_invalid_input() {
        let result = compute_net(&SalaryInput::new(dec("-1")), &TaxRegime::default());

        match result {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "gross_annual_salary");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_monthly_times_twelve_approximates_annual() {
        let breakdown = compute(SalaryInput::new(dec("1234567.89")).with_gratuity());
        let diff = (breakdown.net_monthly() * dec("12") - breakdown.net_annual()).abs();

        assert!(diff <= dec("0.06"), "difference {} too large", diff);
    }

    #[test]
    fn test_audit_trace_has_four_sequenced_steps() {
        let breakdown = compute(SalaryInput::new(dec("1000000")));
        let rule_ids: Vec<&str> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        let numbers: Vec<u32> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();

        assert_eq!(
            rule_ids,
            vec!["gratuity", "provident_fund", "income_tax", "net_salary"]
        );
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_breakdown_metadata() {
        let breakdown = compute(SalaryInput::new(dec("1000000")));

        assert_eq!(breakdown.regime_code, "IN-NEW-REGIME");
        assert_eq!(breakdown.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(breakdown.input, SalaryInput::new(dec("1000000")));
    }

    #[test]
    fn test_compute_net_default_returns_pair() {
        let (annual, monthly) = compute_net_default(dec("1000000"), false, None).unwrap();

        assert_eq!(annual, dec("950000"));
        assert_eq!(monthly, dec("79166.67"));
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
    }
}
