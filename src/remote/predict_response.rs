use serde::Deserialize;

use crate::error::{PREDICTION_REJECTED_FALLBACK, PredictionError};
use crate::models::{ForecastPoint, ForecastResponse, Symbol};

/// Wire shape of `POST /predict`. The backend sends the forecast fields only
/// on success, so everything past the flag is optional at the serde level.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub symbol: Option<String>,
    pub current_high: Option<f64>,
    pub current_low: Option<f64>,
    #[serde(default)]
    pub predictions: Vec<PredictedDay>,
}

#[derive(Debug, Deserialize)]
pub struct PredictedDay {
    pub day: u8,
    pub high: f64,
    pub low: f64,
}

impl PredictResponse {
    /// Folds the wire payload into a checked [`ForecastResponse`].
    ///
    /// A declined prediction carries the backend message through; a success
    /// payload missing its required fields counts as a transport failure,
    /// while a wrong point count or day ordering is a contract violation.
    pub fn into_forecast(self) -> Result<ForecastResponse, PredictionError> {
        if !self.success {
            let message = if self.message.is_empty() {
                PREDICTION_REJECTED_FALLBACK.to_string()
            } else {
                self.message
            };
            return Err(PredictionError::Rejected { message });
        }

        let symbol = self
            .symbol
            .as_deref()
            .and_then(Symbol::normalize)
            .ok_or_else(|| PredictionError::Transport {
                detail: "predict payload missing symbol".to_string(),
            })?;
        let current_high = self.current_high.ok_or_else(|| PredictionError::Transport {
            detail: "predict payload missing current_high".to_string(),
        })?;
        let current_low = self.current_low.ok_or_else(|| PredictionError::Transport {
            detail: "predict payload missing current_low".to_string(),
        })?;

        let points = self
            .predictions
            .into_iter()
            .map(|p| ForecastPoint {
                day: p.day,
                high: p.high,
                low: p.low,
            })
            .collect();

        Ok(ForecastResponse::new(
            symbol,
            current_high,
            current_low,
            points,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastContractError;

    fn success_payload(days: usize) -> String {
        let predictions: Vec<String> = (1..=days)
            .map(|day| {
                format!(
                    r#"{{"day": {day}, "high": {}, "low": {}}}"#,
                    182.0 + day as f64,
                    177.0 + day as f64
                )
            })
            .collect();
        format!(
            r#"{{"success": true, "symbol": "AAPL", "current_high": 182.5, "current_low": 178.1, "predictions": [{}]}}"#,
            predictions.join(",")
        )
    }

    #[test]
    fn test_success_payload_becomes_forecast() {
        let parsed: PredictResponse = serde_json::from_str(&success_payload(7)).unwrap();
        let forecast = parsed.into_forecast().unwrap();
        assert_eq!(forecast.symbol.as_str(), "AAPL");
        assert_eq!(forecast.current_high, 182.5);
        assert_eq!(forecast.points().len(), 7);
        assert_eq!(forecast.points()[0].high, 183.0);
    }

    #[test]
    fn test_failure_payload_carries_backend_message() {
        let raw = r#"{"success": false, "message": "Model error"}"#;
        let parsed: PredictResponse = serde_json::from_str(raw).unwrap();
        match parsed.into_forecast() {
            Err(PredictionError::Rejected { message }) => assert_eq!(message, "Model error"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_payload_without_message_uses_fallback() {
        let raw = r#"{"success": false}"#;
        let parsed: PredictResponse = serde_json::from_str(raw).unwrap();
        match parsed.into_forecast() {
            Err(PredictionError::Rejected { message }) => {
                assert_eq!(message, PREDICTION_REJECTED_FALLBACK)
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_point_count_is_a_contract_violation() {
        for days in [6, 8] {
            let parsed: PredictResponse = serde_json::from_str(&success_payload(days)).unwrap();
            match parsed.into_forecast() {
                Err(PredictionError::Contract(ForecastContractError::InvalidPointCount(got))) => {
                    assert_eq!(got, days)
                }
                other => panic!("expected contract violation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_ascending_days_are_a_contract_violation() {
        let predictions: Vec<String> = [1u8, 2, 4, 3, 5, 6, 7]
            .iter()
            .map(|day| format!(r#"{{"day": {day}, "high": 183.0, "low": 178.0}}"#))
            .collect();
        let raw = format!(
            r#"{{"success": true, "symbol": "AAPL", "current_high": 182.5, "current_low": 178.1, "predictions": [{}]}}"#,
            predictions.join(",")
        );

        let parsed: PredictResponse = serde_json::from_str(&raw).unwrap();
        match parsed.into_forecast() {
            Err(PredictionError::Contract(ForecastContractError::InvalidDaySequence {
                position,
                got,
            })) => {
                assert_eq!(position, 2);
                assert_eq!(got, 4);
            }
            other => panic!("expected contract violation, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_on_success_are_transport_failures() {
        let raw = r#"{"success": true, "symbol": "AAPL"}"#;
        let parsed: PredictResponse = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            parsed.into_forecast(),
            Err(PredictionError::Transport { .. })
        ));
    }
}
