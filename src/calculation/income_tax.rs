//! Progressive income tax calculation.
//!
//! Tax is evaluated from the top bracket down. The portion of income above
//! each threshold is taxed at that bracket's rate, then the working income is
//! clamped to the threshold before the next lower bracket is considered.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::{AuditStep, TaxSlab};

/// The result of a progressive tax evaluation.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// Total tax across all brackets.
    pub total_tax: Decimal,
    /// One slab per bracket that received income, highest first.
    pub slabs: Vec<TaxSlab>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes progressive tax on `taxable_income`.
///
/// `brackets` must be ordered by threshold, highest first, as held by
/// [`TaxRegime`](crate::config::TaxRegime). Income at or below the lowest
/// threshold is untaxed.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_income_tax;
/// use salary_engine::config::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let regime = TaxRegime::default();
/// let result = calculate_income_tax(Decimal::from(1_000_000), regime.brackets(), 1);
///
/// // 5% of 400,000 plus 10% of 300,000
/// assert_eq!(result.total_tax, Decimal::from(50_000));
/// ```
pub fn calculate_income_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
    step_number: u32,
) -> IncomeTaxResult {
    debug_assert!(
        brackets.windows(2).all(|w| w[0].threshold >= w[1].threshold),
        "brackets must be sorted highest threshold first"
    );

    let mut remaining = taxable_income;
    let mut total_tax = Decimal::ZERO;
    let mut slabs = Vec::new();
    let mut upper_bound = None;

    for bracket in brackets {
        if remaining > bracket.threshold {
            let taxable_amount = remaining - bracket.threshold;
            let tax = taxable_amount * bracket.rate;
            total_tax += tax;

            slabs.push(TaxSlab {
                lower_bound: bracket.threshold,
                upper_bound,
                rate: bracket.rate,
                taxable_amount,
                tax,
            });

            remaining = bracket.threshold;
        }
        upper_bound = Some(bracket.threshold);
    }

    let reasoning = if slabs.iter().all(|s| s.tax.is_zero()) {
        format!(
            "No tax due - taxable income {} does not exceed any taxed bracket",
            taxable_income.normalize()
        )
    } else {
        let parts: Vec<String> = slabs
            .iter()
            .filter(|s| !s.tax.is_zero())
            .map(|s| {
                format!(
                    "{} x {} = {}",
                    s.taxable_amount.normalize(),
                    s.rate.normalize(),
                    s.tax.normalize()
                )
            })
            .collect();
        format!("{}; total {}", parts.join(" + "), total_tax.normalize())
    };

    let slab_json: Vec<serde_json::Value> = slabs
        .iter()
        .map(|s| {
            serde_json::json!({
                "lower_bound": s.lower_bound.normalize().to_string(),
                "rate": s.rate.normalize().to_string(),
                "taxable_amount": s.taxable_amount.normalize().to_string(),
                "tax": s.tax.normalize().to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Progressive Income Tax".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "bracket_count": brackets.len()
        }),
        output: serde_json::json!({
            "total_tax": total_tax.normalize().to_string(),
            "slabs": slab_json
        }),
        reasoning,
    };

    IncomeTaxResult {
        total_tax,
        slabs,
        audit_step,
    }
}
