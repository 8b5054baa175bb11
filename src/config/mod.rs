//! Configuration loading and management for the Salary Engine.
//!
//! This module provides functionality to load a tax regime from YAML files,
//! including regime metadata, the progressive bracket table, and the
//! gratuity / provident fund deduction settings.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded regime: {}", loader.regime().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionConfig, GratuityConfig, ProvidentFundConfig, RegimeFile, RegimeMetadata, TaxBracket,
    TaxRegime,
};
