use serde::Serialize;
use thiserror::Error;

use super::symbol::Symbol;

/// Number of daily points every forecast must carry.
pub const FORECAST_DAYS: usize = 7;

/// Predicted high/low for a single day of the forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub day: u8,
    pub high: f64,
    pub low: f64,
}

/// A backend payload that does not satisfy the 7-day forecast contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastContractError {
    #[error("forecast must contain exactly {FORECAST_DAYS} points, got {0}")]
    InvalidPointCount(usize),
    #[error("forecast days must ascend 1..={FORECAST_DAYS}, got day {got} at position {position}")]
    InvalidDaySequence { position: usize, got: u8 },
}

/// A complete 7-day forecast for one symbol.
///
/// Only constructible through [`ForecastResponse::new`], which enforces the
/// point-count and day-ordering contract. A payload with any other shape is
/// rejected outright rather than truncated or padded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResponse {
    pub symbol: Symbol,
    pub current_high: f64,
    pub current_low: f64,
    points: Vec<ForecastPoint>,
}

impl ForecastResponse {
    pub fn new(
        symbol: Symbol,
        current_high: f64,
        current_low: f64,
        points: Vec<ForecastPoint>,
    ) -> Result<Self, ForecastContractError> {
        if points.len() != FORECAST_DAYS {
            return Err(ForecastContractError::InvalidPointCount(points.len()));
        }

        for (position, point) in points.iter().enumerate() {
            if usize::from(point.day) != position + 1 {
                return Err(ForecastContractError::InvalidDaySequence {
                    position,
                    got: point.day,
                });
            }
        }

        Ok(Self {
            symbol,
            current_high,
            current_low,
            points,
        })
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }
}
