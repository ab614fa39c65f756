use crate::common::{PricePoint, SpreadScannerError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// Common exchange enum definition

/// The closed set of supported spot ticker feeds. Adding an exchange means
/// adding a variant here, a module under `src/cex/`, and one arm in
/// [`CexExchange::parse_tickers`]; the aggregator and detector stay untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CexExchange {
    Binance,
    OKX,
    Bybit,
}

impl CexExchange {
    pub fn all() -> [CexExchange; 3] {
        [CexExchange::Binance, CexExchange::OKX, CexExchange::Bybit]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CexExchange::Binance => "Binance",
            CexExchange::OKX => "OKX",
            CexExchange::Bybit => "Bybit",
        }
    }

    /// Parse this exchange's raw full-ticker payload into price points.
    ///
    /// A missing nesting key or wrong type fails with
    /// [`SpreadScannerError::ParseError`] naming the exchange; a well-formed
    /// but empty list parses to an empty `Vec`.
    pub fn parse_tickers(
        &self,
        payload: &serde_json::Value,
    ) -> Result<Vec<PricePoint>, SpreadScannerError> {
        match self {
            CexExchange::Binance => crate::cex::binance::parse_tickers(payload),
            CexExchange::OKX => crate::cex::okx::parse_tickers(payload),
            CexExchange::Bybit => crate::cex::bybit::parse_tickers(payload),
        }
    }
}

// Common exchange trait definition
#[async_trait]
pub trait ExchangeTrait: Send + Sync {
    // Exchange specific methods
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;
    fn exchange_name(&self) -> &str;

    // Default implementations
    async fn get<T: for<'de> serde::Deserialize<'de>>(
        &self,
        endpoint: &str,
    ) -> Result<T, SpreadScannerError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        let response = self.client().get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpreadScannerError::ApiError(format!(
                "{} API error: {} - {}",
                self.exchange_name(),
                status,
                error_text
            )));
        }

        Ok(response.json().await?)
    }

    // Trait methods
    async fn health_check(&self) -> Result<(), SpreadScannerError>;
}

// Common ticker feed trait
#[async_trait]
pub trait TickerFeedTrait: ExchangeTrait {
    fn exchange(&self) -> CexExchange;

    /// Fetch the exchange's full spot ticker snapshot as raw JSON.
    /// Feed the result to [`CexExchange::parse_tickers`].
    async fn fetch_tickers(&self) -> Result<serde_json::Value, SpreadScannerError>;
}

// CEX MACRO EXPORTS
#[macro_export]
macro_rules! create_exchange {
    (
        $struct_name:ident
    ) => {
        pub struct $struct_name {
            client: reqwest::Client,
        }

        impl $struct_name {
            pub fn new() -> Self {
                Self {
                    client: $crate::common::create_http_client(),
                }
            }
        }
    };
}
