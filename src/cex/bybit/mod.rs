mod types;

use crate::cex::bybit::types::BybitTickersResponse;
use crate::common::{
    CexExchange, ExchangeTrait, PricePoint, SpreadScannerError, TickerFeedTrait, normalize_symbol,
};
use crate::create_exchange;
use async_trait::async_trait;

const BYBIT_API_BASE: &str = "https://api.bybit.com/v5";

create_exchange!(Bybit);

#[async_trait]
impl ExchangeTrait for Bybit {
    fn api_base(&self) -> &str {
        BYBIT_API_BASE
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Bybit"
    }

    async fn health_check(&self) -> Result<(), SpreadScannerError> {
        // Bybit market/time endpoint - test connectivity to the REST API
        let endpoint = "market/time";
        self.get::<serde_json::Value>(endpoint)
            .await
            .map_err(|_| SpreadScannerError::HealthCheckFailed)?;

        Ok(())
    }
}

#[async_trait]
impl TickerFeedTrait for Bybit {
    fn exchange(&self) -> CexExchange {
        CexExchange::Bybit
    }

    async fn fetch_tickers(&self) -> Result<serde_json::Value, SpreadScannerError> {
        let endpoint = "market/tickers?category=spot";
        let response: serde_json::Value = self.get(endpoint).await?;

        // Check if API returned success (Bybit uses camelCase in JSON)
        if let Some(ret_code) = response["retCode"].as_i64() {
            if ret_code != 0 {
                let ret_msg = response["retMsg"].as_str().unwrap_or("Unknown error");
                return Err(SpreadScannerError::ApiError(format!(
                    "Bybit API error: {} - {}",
                    ret_code, ret_msg
                )));
            }
        }

        Ok(response)
    }
}

/// Parse the full-ticker snapshot: records live under `result.list`.
pub fn parse_tickers(payload: &serde_json::Value) -> Result<Vec<PricePoint>, SpreadScannerError> {
    let response: BybitTickersResponse =
        serde_json::from_value(payload.clone()).map_err(|source| {
            SpreadScannerError::ParseError {
                exchange: "Bybit",
                source,
            }
        })?;

    Ok(response
        .result
        .list
        .into_iter()
        .map(|t| PricePoint::new(normalize_symbol(&t.symbol), t.last_price))
        .collect())
}
