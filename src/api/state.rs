//! Application state for the Salary Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxRegime;

/// Shared application state.
///
/// Holds the tax regime every calculation runs under. The regime is
/// read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    regime: Arc<TaxRegime>,
}

impl AppState {
    /// Creates a new application state with the given tax regime.
    pub fn new(regime: TaxRegime) -> Self {
        Self {
            regime: Arc::new(regime),
        }
    }

    /// Returns a reference to the tax regime.
    pub fn regime(&self) -> &TaxRegime {
        &self.regime
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaxRegime::default())
    }
}
