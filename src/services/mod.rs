pub use prediction_service::PredictionService;
pub use validation_service::ValidationService;

pub mod prediction_service;
pub mod validation_service;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::PredictionError;
use crate::models::{ForecastResponse, Symbol, ValidationResult};

/// Asks the backend whether a symbol is a usable prediction target.
///
/// Implementations must resolve to a [`ValidationResult`] for every call;
/// transport failures are folded into a `valid = false` verdict rather than
/// surfaced as errors. Empty input cannot reach this seam: [`Symbol`] is
/// non-empty by construction, so the no-network fast path for blank text
/// lives with the caller that normalizes.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SymbolValidator: Send + Sync {
    async fn validate(&self, symbol: &Symbol) -> ValidationResult;
}

/// Requests a 7-day forecast for an already validated symbol.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn forecast(&self, symbol: &Symbol) -> Result<ForecastResponse, PredictionError>;
}
