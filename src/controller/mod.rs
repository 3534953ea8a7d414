use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::{InputError, PredictionError};
use crate::models::{ForecastResponse, Symbol, ValidationResult};
use crate::registry::SymbolRegistry;
use crate::services::{ForecastProvider, SymbolValidator};

/// Status shown after a one-click selection from the registry.
pub const STATUS_SELECTED: &str = "Stock selected";
/// Status shown while a search symbol is being validated.
pub const STATUS_VALIDATING: &str = "Validating...";

/// Where the workflow currently stands, as the view should render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Ready,
    Invalid,
    Predicting,
    Results,
    Error,
}

/// The single authoritative state snapshot consumed by the view.
///
/// Owned and mutated exclusively by [`WorkflowController`]; the view only
/// ever sees immutable borrows or clones of it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub phase: Phase,
    pub selected_symbol: Option<Symbol>,
    pub is_valid: bool,
    pub status_message: String,
    pub is_loading: bool,
    pub forecast: Option<ForecastResponse>,
    pub error: Option<String>,
}

impl WorkflowState {
    fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            selected_symbol: None,
            is_valid: false,
            status_message: String::new(),
            is_loading: false,
            forecast: None,
            error: None,
        }
    }
}

/// A resolved backend call, tagged with the symbol it was issued for so the
/// fold can discard it if a newer selection superseded it.
#[derive(Debug)]
pub enum BackendEvent {
    Validated {
        symbol: Symbol,
        result: ValidationResult,
    },
    Forecasted {
        symbol: Symbol,
        outcome: Result<ForecastResponse, PredictionError>,
    },
}

/// Orchestrates selection, validation, and prediction over the injected
/// services, folding async completions back into [`WorkflowState`].
///
/// Network work is spawned onto the runtime and resolves onto an internal
/// channel; [`pump`](Self::pump) or [`try_pump`](Self::try_pump) folds the
/// completions in resolution order. A completion whose originating symbol no
/// longer matches the current selection, or that arrives outside its
/// expected phase, is dropped without touching state.
pub struct WorkflowController {
    registry: SymbolRegistry,
    validator: Arc<dyn SymbolValidator>,
    forecaster: Arc<dyn ForecastProvider>,
    state: WorkflowState,
    events_tx: mpsc::UnboundedSender<BackendEvent>,
    events_rx: mpsc::UnboundedReceiver<BackendEvent>,
    in_flight: usize,
}

impl WorkflowController {
    pub fn new(
        registry: SymbolRegistry,
        validator: Arc<dyn SymbolValidator>,
        forecaster: Arc<dyn ForecastProvider>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            registry,
            validator,
            forecaster,
            state: WorkflowState::idle(),
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn snapshot(&self) -> WorkflowState {
        self.state.clone()
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// One-click selection of a pre-vetted symbol. Skips validation and
    /// supersedes anything in flight; returns `false` (state untouched) for
    /// a symbol the injected registry does not know.
    pub fn select_from_list(&mut self, symbol: &str) -> bool {
        let Some(symbol) = Symbol::normalize(symbol) else {
            return false;
        };
        if !self.registry.contains(&symbol) {
            warn!("Refusing list selection of unknown symbol {}", symbol);
            return false;
        }

        info!("Selected {} from list", symbol);
        self.state = WorkflowState {
            phase: Phase::Ready,
            selected_symbol: Some(symbol),
            is_valid: true,
            status_message: STATUS_SELECTED.to_string(),
            is_loading: false,
            forecast: None,
            error: None,
        };
        true
    }

    /// Validates searched text against the backend. Empty input is reported
    /// without a network call and without touching state; otherwise the
    /// normalized symbol becomes the selection immediately and one
    /// validation call goes out.
    pub fn submit_search(&mut self, raw_input: &str) -> Result<(), InputError> {
        let symbol = Symbol::normalize(raw_input).ok_or(InputError::EmptySymbol)?;

        info!("Validating searched symbol {}", symbol);
        self.state = WorkflowState {
            phase: Phase::Validating,
            selected_symbol: Some(symbol.clone()),
            is_valid: false,
            status_message: STATUS_VALIDATING.to_string(),
            is_loading: true,
            forecast: None,
            error: None,
        };

        let validator = Arc::clone(&self.validator);
        let tx = self.events_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = validator.validate(&symbol).await;
            let _ = tx.send(BackendEvent::Validated { symbol, result });
        });
        Ok(())
    }

    /// Requests a forecast for the current valid selection. A no-op (returns
    /// `false`) without a valid symbol or while a call is already loading;
    /// from `Results` or `Error` it acts as the explicit re-predict/retry.
    pub fn request_prediction(&mut self) -> bool {
        if self.state.is_loading || !self.state.is_valid {
            return false;
        }
        let Some(symbol) = self.state.selected_symbol.clone() else {
            return false;
        };

        info!("Requesting prediction for {}", symbol);
        self.state.phase = Phase::Predicting;
        self.state.is_loading = true;
        self.state.forecast = None;
        self.state.error = None;

        let forecaster = Arc::clone(&self.forecaster);
        let tx = self.events_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = forecaster.forecast(&symbol).await;
            let _ = tx.send(BackendEvent::Forecasted { symbol, outcome });
        });
        true
    }

    /// Awaits and folds every outstanding completion.
    pub async fn pump(&mut self) {
        while self.in_flight > 0 {
            match self.events_rx.recv().await {
                Some(event) => {
                    self.in_flight -= 1;
                    self.apply_event(event);
                }
                None => break,
            }
        }
    }

    /// Non-blocking drain for a frame-driven view loop. Returns how many
    /// completions were folded.
    pub fn try_pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    fn apply_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Validated { symbol, result } => {
                if self.state.phase != Phase::Validating
                    || self.state.selected_symbol.as_ref() != Some(&symbol)
                {
                    debug!("Dropping stale validation response for {}", symbol);
                    return;
                }

                self.state.is_loading = false;
                self.state.status_message = result.message;
                if result.valid {
                    self.state.phase = Phase::Ready;
                    self.state.is_valid = true;
                } else {
                    self.state.phase = Phase::Invalid;
                    self.state.is_valid = false;
                    self.state.forecast = None;
                }
            }
            BackendEvent::Forecasted { symbol, outcome } => {
                if self.state.phase != Phase::Predicting
                    || self.state.selected_symbol.as_ref() != Some(&symbol)
                {
                    debug!("Dropping stale forecast response for {}", symbol);
                    return;
                }

                self.state.is_loading = false;
                match outcome {
                    Ok(forecast) => {
                        self.state.phase = Phase::Results;
                        self.state.forecast = Some(forecast);
                        self.state.error = None;
                    }
                    Err(e) => {
                        // Debug keeps the transport detail the user-facing text drops.
                        warn!("Prediction for {} failed: {:?}", symbol, e);
                        self.state.phase = Phase::Error;
                        self.state.forecast = None;
                        self.state.error = Some(e.to_string());
                    }
                }
            }
        }
    }
}
