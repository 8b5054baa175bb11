//! Salary breakdown models for the Salary Engine.
//!
//! This module contains the [`SalaryBreakdown`] type and its associated structures
//! that capture all outputs from a salary calculation, including deductions,
//! tax slabs, totals, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryInput;

/// The kind of statutory deduction taken from gross salary.
///
/// # Example
///
/// ```
/// use salary_engine::models::DeductionType;
///
/// let kind = DeductionType::ProvidentFund;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"provident_fund\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// Gratuity withheld at a fixed rate.
    Gratuity,
    /// Provident fund contribution at the employee's chosen percentage.
    ProvidentFund,
}

/// A deduction withheld from gross salary before tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// The kind of deduction.
    #[serde(rename = "type")]
    pub deduction_type: DeductionType,
    /// The fraction of gross salary withheld (e.g., 0.0491).
    pub rate: Decimal,
    /// The amount withheld (gross * rate).
    pub amount: Decimal,
}

/// The portion of taxable income falling inside one bracket.
///
/// # Example
///
/// ```
/// use salary_engine::models::TaxSlab;
/// use rust_decimal::Decimal;
///
/// let slab = TaxSlab {
///     lower_bound: Decimal::from(300_000),
///     upper_bound: Some(Decimal::from(700_000)),
///     rate: Decimal::new(5, 2),
///     taxable_amount: Decimal::from(400_000),
///     tax: Decimal::from(20_000),
/// };
/// assert_eq!(slab.taxable_amount * slab.rate, slab.tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// The bracket threshold (exclusive lower bound).
    pub lower_bound: Decimal,
    /// The next bracket's threshold, or `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied in this slab.
    pub rate: Decimal,
    /// Income falling inside this slab.
    pub taxable_amount: Decimal,
    /// Tax charged on this slab.
    pub tax: Decimal,
}

/// Aggregated totals for a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTotals {
    /// Annual gross salary as supplied.
    pub gross_annual_salary: Decimal,
    /// Gratuity withheld (zero when not included).
    pub gratuity_deduction: Decimal,
    /// Provident fund withheld (zero when absent or out of range).
    pub pf_deduction: Decimal,
    /// Gross minus gratuity and provident fund.
    pub taxable_income: Decimal,
    /// Total progressive tax on taxable income.
    pub total_tax: Decimal,
    /// Take-home annual salary (taxable income minus tax).
    pub net_annual_salary: Decimal,
    /// Take-home monthly salary, rounded to two decimal places.
    pub net_monthly_salary: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that were accepted but not used as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The code of the tax regime applied.
    pub regime_code: String,
    /// The input the calculation ran on.
    pub input: SalaryInput,
    /// Deductions withheld before tax.
    pub deductions: Vec<Deduction>,
    /// Per-bracket tax lines, highest bracket first.
    pub tax_slabs: Vec<TaxSlab>,
    /// Aggregated totals for the calculation.
    pub totals: SalaryTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl SalaryBreakdown {
    /// Take-home annual salary.
    pub fn net_annual(&self) -> Decimal {
        self.totals.net_annual_salary
    }

    /// Take-home monthly salary.
    pub fn net_monthly(&self) -> Decimal {
        self.totals.net_monthly_salary
    }
}
