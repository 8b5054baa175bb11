//! Gratuity deduction calculation.
//!
//! Gratuity is withheld as a fixed fraction of annual gross salary when the
//! employee opts in.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Deduction, DeductionType};

/// The gratuity result, including the amount withheld and the audit step.
#[derive(Debug, Clone)]
pub struct GratuityResult {
    /// The amount withheld (zero when gratuity is not included).
    pub amount: Decimal,
    /// The deduction line, present only when gratuity is included.
    pub deduction: Option<Deduction>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the gratuity deduction for a gross annual salary.
///
/// # Arguments
///
/// * `gross_annual_salary` - Annual gross salary
/// * `include_gratuity` - Whether gratuity is withheld at all
/// * `rate` - Fraction of gross withheld (4.91% in the built-in regime)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_gratuity;
/// use rust_decimal::Decimal;
///
/// let result = calculate_gratuity(Decimal::from(1_000_000), true, Decimal::new(491, 4), 1);
/// assert_eq!(result.amount, Decimal::from(49_100));
/// ```
pub fn calculate_gratuity(
    gross_annual_salary: Decimal,
    include_gratuity: bool,
    rate: Decimal,
    step_number: u32,
) -> GratuityResult {
    if include_gratuity {
        let amount = gross_annual_salary * rate;

        let audit_step = AuditStep {
            step_number,
            rule_id: "gratuity".to_string(),
            rule_name: "Gratuity Deduction".to_string(),
            input: serde_json::json!({
                "gross_annual_salary": gross_annual_salary.normalize().to_string(),
                "include_gratuity": true
            }),
            output: serde_json::json!({
                "amount": amount.normalize().to_string(),
                "rate": rate.normalize().to_string(),
                "deduction_applied": true
            }),
            reasoning: format!(
                "{} x {} = {}",
                gross_annual_salary.normalize(),
                rate.normalize(),
                amount.normalize()
            ),
        };

        GratuityResult {
            amount,
            deduction: Some(Deduction {
                deduction_type: DeductionType::Gratuity,
                rate,
                amount,
            }),
            audit_step,
        }
    } else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "gratuity".to_string(),
            rule_name: "Gratuity Deduction".to_string(),
            input: serde_json::json!({
                "gross_annual_salary": gross_annual_salary.normalize().to_string(),
                "include_gratuity": false
            }),
            output: serde_json::json!({
                "amount": "0",
                "deduction_applied": false
            }),
            reasoning: "No gratuity deducted - not included".to_string(),
        };

        GratuityResult {
            amount: Decimal::ZERO,
            deduction: None,
            audit_step,
        }
    }
}
