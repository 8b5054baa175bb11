//! Salary input model.
//!
//! This module defines [`SalaryInput`], the validated numeric parameters
//! a salary calculation runs on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The parameters of a single salary calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(1_200_000))
///     .with_gratuity()
///     .with_pf_percentage(Decimal::from(12));
///
/// assert!(input.include_gratuity);
/// assert_eq!(input.pf_percentage, Some(Decimal::from(12)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Annual gross salary before any deduction.
    pub gross_annual_salary: Decimal,
    /// Whether the gratuity deduction is withheld.
    #[serde(default)]
    pub include_gratuity: bool,
    /// Provident fund contribution as a percentage of gross salary.
    #[serde(default)]
    pub pf_percentage: Option<Decimal>,
}

impl SalaryInput {
    /// Creates an input with no gratuity and no provident fund.
    pub fn new(gross_annual_salary: Decimal) -> Self {
        Self {
            gross_annual_salary,
            include_gratuity: false,
            pf_percentage: None,
        }
    }

    /// Enables the gratuity deduction.
    pub fn with_gratuity(mut self) -> Self {
        self.include_gratuity = true;
        self
    }

    /// Sets the provident fund contribution percentage.
    pub fn with_pf_percentage(mut self, percentage: Decimal) -> Self {
        self.pf_percentage = Some(percentage);
        self
    }
}
