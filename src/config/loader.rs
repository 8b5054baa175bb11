//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax regime
//! from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DeductionConfig, RegimeFile, TaxBracket, TaxRegime};

/// Loads and provides access to a tax regime configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── regime.yaml      # Regime metadata and bracket table
/// └── deductions.yaml  # Gratuity rate and provident fund range
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// for bracket in loader.regime().brackets() {
///     println!("> {} taxed at {}", bracket.threshold, bracket.rate);
/// }
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    regime: TaxRegime,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The bracket table or deduction settings are out of range (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime_path = path.join("regime.yaml");
        let regime_file = Self::load_yaml::<RegimeFile>(&regime_path)?;
        Self::validate_brackets(&regime_path, &regime_file.brackets)?;

        let deductions_path = path.join("deductions.yaml");
        let deductions = Self::load_yaml::<DeductionConfig>(&deductions_path)?;
        Self::validate_deductions(&deductions_path, &deductions)?;

        tracing::debug!(
            code = %regime_file.regime.code,
            brackets = regime_file.brackets.len(),
            "Loaded tax regime configuration"
        );

        Ok(Self {
            regime: TaxRegime::new(regime_file.regime, regime_file.brackets, deductions),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_brackets(path: &Path, brackets: &[TaxBracket]) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if brackets.is_empty() {
            return Err(parse_error("at least one tax bracket is required".to_string()));
        }

        for bracket in brackets {
            if bracket.threshold < Decimal::ZERO {
                return Err(parse_error(format!(
                    "bracket threshold {} must not be negative",
                    bracket.threshold
                )));
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(parse_error(format!(
                    "bracket rate {} must be between 0 and 1",
                    bracket.rate
                )));
            }
        }

        Ok(())
    }

    fn validate_deductions(path: &Path, deductions: &DeductionConfig) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };
        let hundred = Decimal::ONE_HUNDRED;
        let gratuity_rate = deductions.gratuity.rate;
        let pf = &deductions.provident_fund;

        if gratuity_rate < Decimal::ZERO || gratuity_rate > Decimal::ONE {
            return Err(parse_error(format!(
                "gratuity rate {} must be between 0 and 1",
                gratuity_rate
            )));
        }
        if pf.min_percentage < Decimal::ZERO || pf.max_percentage > hundred {
            return Err(parse_error(format!(
                "provident fund range {}-{} must lie within 0-100",
                pf.min_percentage, pf.max_percentage
            )));
        }
        if pf.min_percentage > pf.max_percentage {
            return Err(parse_error(format!(
                "provident fund minimum {} exceeds maximum {}",
                pf.min_percentage, pf.max_percentage
            )));
        }
        // Taxable income must never go negative.
        if gratuity_rate + pf.max_percentage / hundred > Decimal::ONE {
            return Err(parse_error(
                "gratuity and maximum provident fund together exceed 100% of gross".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the loaded tax regime.
    pub fn regime(&self) -> &TaxRegime {
        &self.regime
    }

    /// Consumes the loader, returning the tax regime.
    pub fn into_regime(self) -> TaxRegime {
        self.regime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tempfile::tempdir;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const VALID_REGIME: &str = r#"
regime:
  code: "TEST"
  name: "Test regime"
  currency: "INR"
brackets:
  - threshold: "100"
    rate: "0.10"
  - threshold: "0"
    rate: "0"
"#;

    const VALID_DEDUCTIONS: &str = r#"
gratuity:
  rate: "0.0491"
provident_fund:
  min_percentage: "6"
  max_percentage: "12"
"#;

    fn write_config(regime: &str, deductions: &str) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("regime.yaml"), regime).unwrap();
        fs::write(dir.path().join("deductions.yaml"), deductions).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regime().metadata().code, "IN-NEW-REGIME");
        assert_eq!(loader.regime().metadata().currency, "INR");
    }

    #[test]
    fn test_shipped_configuration_matches_builtin_regime() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = TaxRegime::default();

        assert_eq!(loader.regime().brackets(), builtin.brackets());
        assert_eq!(loader.regime().deductions(), builtin.deductions());
    }

    #[test]
    fn test_brackets_sorted_highest_first() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brackets = loader.regime().brackets();

        assert_eq!(brackets.first().unwrap().threshold, dec("1500000"));
        assert_eq!(brackets.first().unwrap().rate, dec("0.30"));
        assert!(
            brackets
                .windows(2)
                .all(|pair| pair[0].threshold > pair[1].threshold)
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("regime.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_deductions_returns_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("regime.yaml"), VALID_REGIME).unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("deductions.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config("regime: [unclosed", VALID_DEDUCTIONS);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("regime.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bracket_table_rejected() {
        let regime = r#"
regime:
  code: "TEST"
  name: "Test regime"
  currency: "INR"
brackets: []
"#;
        let dir = write_config(regime, VALID_DEDUCTIONS);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("at least one tax bracket"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let regime = r#"
regime:
  code: "TEST"
  name: "Test regime"
  currency: "INR"
brackets:
  - threshold: "100"
    rate: "30"
"#;
        let dir = write_config(regime, VALID_DEDUCTIONS);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("between 0 and 1"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let regime = r#"
regime:
  code: "TEST"
  name: "Test regime"
  currency: "INR"
brackets:
  - threshold: "-5"
    rate: "0.1"
"#;
        let dir = write_config(regime, VALID_DEDUCTIONS);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_inverted_provident_fund_range_rejected() {
        let deductions = r#"
gratuity:
  rate: "0.0491"
provident_fund:
  min_percentage: "12"
  max_percentage: "6"
"#;
        let dir = write_config(VALID_REGIME, deductions);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("deductions.yaml"));
                assert!(message.contains("exceeds maximum"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_deductions_exceeding_gross_rejected() {
        let deductions = r#"
gratuity:
  rate: "0.5"
provident_fund:
  min_percentage: "6"
  max_percentage: "60"
"#;
        let dir = write_config(VALID_REGIME, deductions);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_custom_configuration_loaded() {
        let dir = write_config(VALID_REGIME, VALID_DEDUCTIONS);
        let regime = ConfigLoader::load(dir.path()).unwrap().into_regime();

        assert_eq!(regime.metadata().code, "TEST");
        assert_eq!(regime.brackets().len(), 2);
        assert_eq!(regime.brackets()[0].threshold, dec("100"));
    }
}
