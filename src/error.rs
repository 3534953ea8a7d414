use thiserror::Error;

use crate::models::ForecastContractError;

/// Shown when the validation round trip itself fails (network or parse).
pub const VALIDATION_FALLBACK: &str = "Error validating stock. Please try again.";

/// Shown when the prediction round trip itself fails (network or parse).
pub const PREDICTION_FALLBACK: &str = "Error making prediction. Please try again.";

/// Fallback when the backend rejects a prediction without a message.
pub const PREDICTION_REJECTED_FALLBACK: &str = "Prediction failed";

/// Transport-level failure talking to the backend. Either endpoint treats a
/// non-success HTTP status the same as a connection or parse failure.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Why a prediction produced no forecast.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// Backend answered but declined; carries its message verbatim.
    #[error("{message}")]
    Rejected { message: String },
    /// Network/parse/HTTP failure; displays the fixed fallback text.
    #[error("{PREDICTION_FALLBACK}")]
    Transport { detail: String },
    /// Backend answered success but the payload breaks the 7-day contract.
    #[error(transparent)]
    Contract(#[from] ForecastContractError),
}

/// User input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a stock symbol")]
    EmptySymbol,
}
