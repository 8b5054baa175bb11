//! Calculation logic for the Salary Engine.
//!
//! This module contains the calculation functions for determining take-home
//! salary: raw input parsing, the gratuity and provident fund deductions,
//! progressive income tax, and the net salary computation that combines them.

mod gratuity;
mod income_tax;
mod input;
mod net_salary;
mod provident_fund;

pub use gratuity::{GratuityResult, calculate_gratuity};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use input::{parse_amount, parse_salary_input};
pub use net_salary::{MONTHS_PER_YEAR, compute_net, compute_net_default, round_currency};
pub use provident_fund::{PF_OUT_OF_RANGE_WARNING, ProvidentFundResult, calculate_provident_fund};
