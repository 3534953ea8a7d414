//! Client workflow for a remote stock-price forecasting backend.
//!
//! The backend exposes two JSON endpoints: `POST /search_stock` validates a
//! ticker symbol and `POST /predict` returns a 7-day high/low forecast. This
//! crate owns everything between user intent and a renderable state
//! snapshot: the [`controller::WorkflowController`] reconciles selection,
//! validation, and prediction with the async request lifecycle (including
//! dropping responses a newer selection has superseded), and
//! [`chart::ChartSeries`] reshapes a forecast into plottable series.

pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod models;
pub mod registry;
pub mod remote;
pub mod services;

pub use chart::ChartSeries;
pub use config::BackendConfig;
pub use controller::{Phase, WorkflowController, WorkflowState};
pub use models::{ForecastPoint, ForecastResponse, Symbol, ValidationResult};
pub use registry::SymbolRegistry;
