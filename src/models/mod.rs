//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod salary_breakdown;
mod salary_input;

pub use salary_breakdown::{
    AuditStep, AuditTrace, AuditWarning, Deduction, DeductionType, SalaryBreakdown, SalaryTotals,
    TaxSlab,
};
pub use salary_input::SalaryInput;
