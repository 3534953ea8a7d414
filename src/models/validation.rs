use serde::Serialize;

use super::symbol::Symbol;

/// Verdict of a symbol-validation round trip. Always a value, never an
/// error: transport failures are folded into `valid = false` by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub symbol: Symbol,
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn accepted(symbol: Symbol, message: impl Into<String>) -> Self {
        Self {
            symbol,
            valid: true,
            message: message.into(),
        }
    }

    pub fn rejected(symbol: Symbol, message: impl Into<String>) -> Self {
        Self {
            symbol,
            valid: false,
            message: message.into(),
        }
    }
}
