mod types;
use crate::common::{
    CexExchange, ExchangeTrait, PricePoint, SpreadScannerError, TickerFeedTrait, normalize_symbol,
};
use crate::create_exchange;
use async_trait::async_trait;
use std::collections::HashSet;
use types::{BinanceExchangeInfo, BinanceTickerEntry};

const BINANCE_API_BASE: &str = "https://api.binance.com/api/v3";

/// Symbol status that marks a pair as currently tradable.
const STATUS_TRADING: &str = "TRADING";

create_exchange!(Binance);

#[async_trait]
impl ExchangeTrait for Binance {
    fn api_base(&self) -> &str {
        BINANCE_API_BASE
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Binance"
    }

    async fn health_check(&self) -> Result<(), SpreadScannerError> {
        // Binance ping endpoint - test connectivity to the REST API
        let endpoint = "ping";
        self.get::<serde_json::Value>(endpoint)
            .await
            .map_err(|_| SpreadScannerError::HealthCheckFailed)?;

        Ok(())
    }
}

#[async_trait]
impl TickerFeedTrait for Binance {
    fn exchange(&self) -> CexExchange {
        CexExchange::Binance
    }

    async fn fetch_tickers(&self) -> Result<serde_json::Value, SpreadScannerError> {
        // Last price for every spot symbol in one call
        self.get("ticker/price").await
    }
}

impl Binance {
    /// Currently tradable symbols from `exchangeInfo`, normalized.
    /// This is the allow-list input for the symbol filter; Binance keeps
    /// delisted pairs in its ticker snapshot, so they must be screened out.
    pub async fn fetch_tradable_symbols(&self) -> Result<HashSet<String>, SpreadScannerError> {
        let info: BinanceExchangeInfo = self.get("exchangeInfo").await?;

        Ok(info
            .symbols
            .into_iter()
            .filter(|s| s.status == STATUS_TRADING)
            .map(|s| normalize_symbol(&s.symbol))
            .collect())
    }
}

/// Parse the full-ticker snapshot: a bare array of `{symbol, price}` records.
pub fn parse_tickers(payload: &serde_json::Value) -> Result<Vec<PricePoint>, SpreadScannerError> {
    let entries: Vec<BinanceTickerEntry> =
        serde_json::from_value(payload.clone()).map_err(|source| {
            SpreadScannerError::ParseError {
                exchange: "Binance",
                source,
            }
        })?;

    Ok(entries
        .into_iter()
        .map(|t| PricePoint::new(normalize_symbol(&t.symbol), t.price))
        .collect())
}
