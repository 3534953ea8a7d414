pub mod backend_client;
pub mod predict_response;
pub mod search_response;

pub use backend_client::BackendClient;
pub use predict_response::{PredictResponse, PredictedDay};
pub use search_response::SearchStockResponse;
