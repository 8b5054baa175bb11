//! Provident fund deduction calculation.
//!
//! A provident fund contribution is withheld as a percentage of annual gross
//! salary. Percentages outside the accepted range are ignored rather than
//! rejected; the calculation proceeds with no provident fund and records a
//! warning.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::ProvidentFundConfig;
use crate::models::{AuditStep, AuditWarning, Deduction, DeductionType};

/// Warning code recorded when a percentage falls outside the accepted range.
pub const PF_OUT_OF_RANGE_WARNING: &str = "PF_PERCENTAGE_OUT_OF_RANGE";

/// The provident fund result, including the amount withheld and the audit step.
#[derive(Debug, Clone)]
pub struct ProvidentFundResult {
    /// The amount withheld (zero when absent or out of range).
    pub amount: Decimal,
    /// The deduction line, present only when a valid percentage was supplied.
    pub deduction: Option<Deduction>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when the supplied percentage was ignored.
    pub warning: Option<AuditWarning>,
}

/// Computes the provident fund deduction for a gross annual salary.
///
/// # Arguments
///
/// * `gross_annual_salary` - Annual gross salary
/// * `pf_percentage` - Contribution percentage, if the employee contributes
/// * `config` - The accepted percentage range
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_provident_fund;
/// use salary_engine::config::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let regime = TaxRegime::default();
/// let pf = &regime.deductions().provident_fund;
///
/// let result = calculate_provident_fund(Decimal::from(1_000_000), Some(Decimal::from(12)), pf, 1);
/// assert_eq!(result.amount, Decimal::from(120_000));
///
/// let ignored = calculate_provident_fund(Decimal::from(1_000_000), Some(Decimal::from(15)), pf, 1);
/// assert_eq!(ignored.amount, Decimal::ZERO);
/// assert!(ignored.warning.is_some());
/// ```
pub fn calculate_provident_fund(
    gross_annual_salary: Decimal,
    pf_percentage: Option<Decimal>,
    config: &ProvidentFundConfig,
    step_number: u32,
) -> ProvidentFundResult {
    let gross_str = gross_annual_salary.normalize().to_string();

    let Some(percentage) = pf_percentage else {
        return ProvidentFundResult {
            amount: Decimal::ZERO,
            deduction: None,
            audit_step: AuditStep {
                step_number,
                rule_id: "provident_fund".to_string(),
                rule_name: "Provident Fund Deduction".to_string(),
                input: serde_json::json!({
                    "gross_annual_salary": gross_str,
                    "pf_percentage": null
                }),
                output: serde_json::json!({
                    "amount": "0",
                    "deduction_applied": false
                }),
                reasoning: "No provident fund deducted - no percentage supplied".to_string(),
            },
            warning: None,
        };
    };

    if !config.accepts(percentage) {
        warn!(
            pf_percentage = %percentage,
            min = %config.min_percentage,
            max = %config.max_percentage,
            "Provident fund percentage out of range, ignoring"
        );

        let message = format!(
            "Provident fund percentage {} is outside {}-{} and was ignored",
            percentage.normalize(),
            config.min_percentage.normalize(),
            config.max_percentage.normalize()
        );

        return ProvidentFundResult {
            amount: Decimal::ZERO,
            deduction: None,
            audit_step: AuditStep {
                step_number,
                rule_id: "provident_fund".to_string(),
                rule_name: "Provident Fund Deduction".to_string(),
                input: serde_json::json!({
                    "gross_annual_salary": gross_str,
                    "pf_percentage": percentage.normalize().to_string()
                }),
                output: serde_json::json!({
                    "amount": "0",
                    "deduction_applied": false,
                    "out_of_range": true
                }),
                reasoning: message.clone(),
            },
            warning: Some(AuditWarning {
                code: PF_OUT_OF_RANGE_WARNING.to_string(),
                message,
                severity: "medium".to_string(),
            }),
        };
    }

    let rate = percentage / Decimal::ONE_HUNDRED;
    let amount = gross_annual_salary * rate;

    ProvidentFundResult {
        amount,
        deduction: Some(Deduction {
            deduction_type: DeductionType::ProvidentFund,
            rate,
            amount,
        }),
        audit_step: AuditStep {
            step_number,
            rule_id: "provident_fund".to_string(),
            rule_name: "Provident Fund Deduction".to_string(),
            input: serde_json::json!({
                "gross_annual_salary": gross_str,
                "pf_percentage": percentage.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": amount.normalize().to_string(),
                "rate": rate.normalize().to_string(),
                "deduction_applied": true
            }),
            reasoning: format!(
                "{} x {}% = {}",
                gross_annual_salary.normalize(),
                percentage.normalize(),
                amount.normalize()
            ),
        },
        warning: None,
    }
}
