//! Response types for the Salary Engine API.
//!
//! This module defines the success body of `/calculate`, the error response
//! structures, and the mapping from engine errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::{RegimeMetadata, TaxBracket};
use crate::error::EngineError;
use crate::format::format_inr;
use crate::models::SalaryBreakdown;

/// Display strings for the two headline outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSalary {
    /// Net annual salary, e.g. `₹ 9,50,000`.
    pub net_annual: String,
    /// Net monthly salary, e.g. `₹ 79,166.67`.
    pub net_monthly: String,
}

/// Success body of the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The full breakdown.
    pub breakdown: SalaryBreakdown,
    /// Display strings for the headline outputs.
    pub formatted: FormattedSalary,
}

impl From<SalaryBreakdown> for CalculationResponse {
    fn from(breakdown: SalaryBreakdown) -> Self {
        let formatted = FormattedSalary {
            net_annual: format_inr(breakdown.net_annual()),
            net_monthly: format_inr(breakdown.net_monthly()),
        };
        Self {
            breakdown,
            formatted,
        }
    }
}

/// Body of the `/tax-brackets` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBracketsResponse {
    /// The regime the brackets belong to.
    pub regime: RegimeMetadata,
    /// Brackets, highest threshold first.
    pub brackets: Vec<TaxBracket>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid input error response.
    pub fn invalid_input(field: &str, message: &str) -> Self {
        Self::with_details(
            "INVALID_INPUT",
            "Please enter a valid number",
            format!("{}: {}", field, message),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_input(&field, &message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
