use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::VALIDATION_FALLBACK;
use crate::models::{Symbol, ValidationResult};
use crate::remote::BackendClient;

use super::SymbolValidator;

/// Backend-backed implementation of [`SymbolValidator`]: exactly one
/// `POST /search_stock` per call.
pub struct ValidationService {
    client: BackendClient,
}

impl ValidationService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SymbolValidator for ValidationService {
    async fn validate(&self, symbol: &Symbol) -> ValidationResult {
        match self.client.search_stock(symbol).await {
            Ok(resp) => {
                debug!(
                    "Validation for {} resolved: success={} message={:?}",
                    symbol, resp.success, resp.message
                );
                if resp.success {
                    ValidationResult::accepted(symbol.clone(), resp.message)
                } else {
                    ValidationResult::rejected(symbol.clone(), resp.message)
                }
            }
            Err(e) => {
                warn!("Validation transport failure for {}: {}", symbol, e);
                ValidationResult::rejected(symbol.clone(), VALIDATION_FALLBACK)
            }
        }
    }
}
