use thiserror::Error;

use crate::models::{FORECAST_DAYS, ForecastResponse};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("chart input must contain exactly {FORECAST_DAYS} points, got {0}")]
    InvalidPointCount(usize),
}

/// Chart-ready series for one forecast: one label and one high/low pair per
/// day, in the forecast's own order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub high_series: Vec<f64>,
    pub low_series: Vec<f64>,
}

impl ChartSeries {
    /// Pure reshape of a forecast into plottable series. Never interpolates,
    /// truncates, or pads: any point count other than 7 is an error.
    pub fn from_forecast(forecast: &ForecastResponse) -> Result<Self, ChartError> {
        let points = forecast.points();
        if points.len() != FORECAST_DAYS {
            return Err(ChartError::InvalidPointCount(points.len()));
        }

        let mut labels = Vec::with_capacity(FORECAST_DAYS);
        let mut high_series = Vec::with_capacity(FORECAST_DAYS);
        let mut low_series = Vec::with_capacity(FORECAST_DAYS);

        for point in points {
            labels.push(format!("Day {}", point.day));
            high_series.push(point.high);
            low_series.push(point.low);
        }

        Ok(Self {
            labels,
            high_series,
            low_series,
        })
    }
}
