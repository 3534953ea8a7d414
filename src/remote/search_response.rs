use serde::Deserialize;

/// Wire shape of `POST /search_stock`.
#[derive(Debug, Deserialize)]
pub struct SearchStockResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
