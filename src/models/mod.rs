pub mod forecast;
pub mod symbol;
pub mod validation;

pub use forecast::{FORECAST_DAYS, ForecastContractError, ForecastPoint, ForecastResponse};
pub use symbol::Symbol;
pub use validation::ValidationResult;
