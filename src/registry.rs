use crate::models::Symbol;

/// The catalog offered for one-click selection on the original page.
const POPULAR_STOCKS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "JPM", "V", "WMT", "JNJ", "PG", "UNH",
    "HD", "BAC", "MA", "DIS", "ADBE", "NFLX", "CRM", "CSCO", "INTC", "PFE", "VZ", "KO", "NKE", "T",
    "MRK", "ABT", "PEP", "COST", "TMO", "AVGO", "TXN", "LLY", "ORCL", "ACN", "CVX", "NEE", "DHR",
    "QCOM", "MDT", "BMY", "HON", "UNP", "LIN", "PM", "RTX", "LOW", "AMD",
];

/// Static catalog of pre-vetted symbols. Injected into the workflow
/// controller so list selection can skip the validation round trip.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    symbols: Vec<Symbol>,
}

impl SymbolRegistry {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// The 50-entry popular-stocks catalog.
    pub fn popular() -> Self {
        Self::new(POPULAR_STOCKS.iter().filter_map(|s| Symbol::normalize(s)))
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
