use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::PredictionError;
use crate::models::{ForecastResponse, Symbol};
use crate::remote::BackendClient;

use super::ForecastProvider;

/// Backend-backed implementation of [`ForecastProvider`]: exactly one
/// `POST /predict` per call, no automatic retry. A failed prediction is
/// retried only by an explicit new request from the caller.
pub struct PredictionService {
    client: BackendClient,
}

impl PredictionService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ForecastProvider for PredictionService {
    async fn forecast(&self, symbol: &Symbol) -> Result<ForecastResponse, PredictionError> {
        let resp = match self.client.predict(symbol).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Prediction transport failure for {}: {}", symbol, e);
                return Err(PredictionError::Transport {
                    detail: e.to_string(),
                });
            }
        };

        debug!(
            "Prediction for {} resolved: success={}",
            symbol, resp.success
        );
        resp.into_forecast()
    }
}
