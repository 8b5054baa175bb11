//! Configuration types for the tax regime.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in regime
//! used when no configuration directory is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the tax regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short identifying code (e.g., "IN-NEW-REGIME").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// ISO currency code all amounts are expressed in.
    pub currency: String,
}

/// A single progressive tax bracket.
///
/// Income strictly above `threshold` (up to the next higher bracket's
/// threshold) is taxed at `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (exclusive).
    pub threshold: Decimal,
    /// The marginal rate as a fraction (e.g., 0.30 for 30%).
    pub rate: Decimal,
}

/// Structure of `regime.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeFile {
    /// Regime metadata.
    pub regime: RegimeMetadata,
    /// The bracket table, in any order.
    pub brackets: Vec<TaxBracket>,
}

/// Gratuity deduction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityConfig {
    /// Fraction of gross salary withheld as gratuity (e.g., 0.0491).
    pub rate: Decimal,
}

/// Provident fund deduction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidentFundConfig {
    /// Lowest accepted contribution percentage (inclusive).
    pub min_percentage: Decimal,
    /// Highest accepted contribution percentage (inclusive).
    pub max_percentage: Decimal,
}

impl ProvidentFundConfig {
    /// Returns true if `percentage` lies within the accepted range.
    pub fn accepts(&self, percentage: Decimal) -> bool {
        percentage >= self.min_percentage && percentage <= self.max_percentage
    }
}

/// Structure of `deductions.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionConfig {
    /// Gratuity settings.
    pub gratuity: GratuityConfig,
    /// Provident fund settings.
    pub provident_fund: ProvidentFundConfig,
}

/// The complete tax regime used by a salary calculation.
///
/// Brackets are held sorted by threshold, highest first, which is the
/// order the progressive tax evaluation walks them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxRegime {
    metadata: RegimeMetadata,
    brackets: Vec<TaxBracket>,
    deductions: DeductionConfig,
}

impl TaxRegime {
    /// Creates a new TaxRegime from its component parts.
    pub fn new(
        metadata: RegimeMetadata,
        brackets: Vec<TaxBracket>,
        deductions: DeductionConfig,
    ) -> Self {
        let mut sorted_brackets = brackets;
        sorted_brackets.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Self {
            metadata,
            brackets: sorted_brackets,
            deductions,
        }
    }

    /// Returns the regime metadata.
    pub fn metadata(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns the brackets, highest threshold first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the deduction settings.
    pub fn deductions(&self) -> &DeductionConfig {
        &self.deductions
    }
}

impl Default for TaxRegime {
    /// The built-in regime: 0/5/10/15/20/30% slabs, 4.91% gratuity and a
    /// 6-12% provident fund range.
    fn default() -> Self {
        let bracket = |threshold: i64, rate_pct: i64| TaxBracket {
            threshold: Decimal::from(threshold),
            rate: Decimal::new(rate_pct, 2),
        };

        Self::new(
            RegimeMetadata {
                code: "IN-NEW-REGIME".to_string(),
                name: "Progressive income tax".to_string(),
                currency: "INR".to_string(),
            },
            vec![
                bracket(1_500_000, 30),
                bracket(1_200_000, 20),
                bracket(1_000_000, 15),
                bracket(700_000, 10),
                bracket(300_000, 5),
                bracket(0, 0),
            ],
            DeductionConfig {
                gratuity: GratuityConfig {
                    rate: Decimal::new(491, 4),
                },
                provident_fund: ProvidentFundConfig {
                    min_percentage: Decimal::from(6),
                    max_percentage: Decimal::from(12),
                },
            },
        )
    }
}
