use serde::{Deserialize, Serialize};

/// One (symbol, last price) quote emitted by an exchange parser.
///
/// The symbol is already normalized to the canonical alphabet
/// (see [`crate::common::normalize_symbol`]); the price is kept as the
/// exchange's decimal string so no precision is lost before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub symbol: String,
    pub price: String,
}

impl PricePoint {
    pub fn new(symbol: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
        }
    }
}
