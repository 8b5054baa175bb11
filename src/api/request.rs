//! Request types for the Salary Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::parse_salary_input;
use crate::error::EngineResult;
use crate::models::SalaryInput;

/// A numeric field as a client sent it.
///
/// Form clients post the text the user typed; programmatic clients post a
/// JSON number. Both are parsed with the same rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// A JSON string holding the text as entered.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl RawNumber {
    /// Returns the value as text ready for parsing.
    pub fn as_text(&self) -> String {
        match self {
            RawNumber::Text(text) => text.clone(),
            RawNumber::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for RawNumber {
    fn from(text: &str) -> Self {
        RawNumber::Text(text.to_string())
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Annual gross salary.
    pub gross_annual_salary: RawNumber,
    /// Whether the gratuity deduction is withheld.
    #[serde(default)]
    pub include_gratuity: bool,
    /// Provident fund contribution percentage.
    #[serde(default)]
    pub pf_percentage: Option<RawNumber>,
}

impl CalculationRequest {
    /// Validates the raw fields into a [`SalaryInput`].
    pub fn into_input(self) -> EngineResult<SalaryInput> {
        let pf_text = self.pf_percentage.as_ref().map(RawNumber::as_text);
        parse_salary_input(
            &self.gross_annual_salary.as_text(),
            self.include_gratuity,
            pf_text.as_deref(),
        )
    }
}
