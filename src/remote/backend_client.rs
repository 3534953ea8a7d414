use reqwest::Client;
use serde::Serialize;
use tracing::error;

use crate::config::BackendConfig;
use crate::error::TransportError;
use crate::models::Symbol;

use super::predict_response::PredictResponse;
use super::search_response::SearchStockResponse;

#[derive(Debug, Serialize)]
struct SymbolRequest<'a> {
    symbol: &'a str,
}

/// HTTP client for the forecasting backend's two endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    pub async fn search_stock(
        &self,
        symbol: &Symbol,
    ) -> Result<SearchStockResponse, TransportError> {
        self.post_json("/search_stock", symbol).await
    }

    pub async fn predict(&self, symbol: &Symbol) -> Result<PredictResponse, TransportError> {
        self.post_json("/predict", symbol).await
    }

    async fn post_json<T>(&self, path: &str, symbol: &Symbol) -> Result<T, TransportError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(&SymbolRequest {
                symbol: symbol.as_str(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("Backend call {} failed with {}: {}", path, status, body);
            return Err(TransportError::Status { status, body });
        }

        Ok(resp.json::<T>().await?)
    }
}
