use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cross-exchange spread opportunity - buy on the cheapest exchange, sell on
/// the dearest.
///
/// Prices and the spread serialize as decimal strings, so downstream
/// consumers never see binary-float artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadOpportunity {
    /// Symbol (e.g., "BTCUSDT")
    pub symbol: String,
    /// Exchange quoting the lowest price
    pub buy_exchange: String,
    /// Exchange quoting the highest price
    pub sell_exchange: String,
    /// Lowest price across the included exchanges
    pub buy_price: Decimal,
    /// Highest price across the included exchanges
    pub sell_price: Decimal,
    /// (sell_price / buy_price - 1) * 100, exact decimal arithmetic
    pub spread_percent: Decimal,
}

impl SpreadOpportunity {
    /// Spread rounded and padded to two fractional digits, for reports.
    pub fn spread_display(&self) -> String {
        let mut rounded = self.spread_percent.round_dp(2);
        rounded.rescale(2);
        format!("{rounded}%")
    }
}
