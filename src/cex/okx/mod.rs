mod types;

use crate::cex::okx::types::OkxTickersResponse;
use crate::common::{
    CexExchange, ExchangeTrait, PricePoint, SpreadScannerError, TickerFeedTrait, normalize_symbol,
};
use crate::create_exchange;
use async_trait::async_trait;

const OKX_API_BASE: &str = "https://www.okx.com/api/v5";

create_exchange!(OKX);

#[async_trait]
impl ExchangeTrait for OKX {
    fn api_base(&self) -> &str {
        OKX_API_BASE
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "OKX"
    }

    async fn health_check(&self) -> Result<(), SpreadScannerError> {
        // OKX public/time endpoint - returns server time
        let endpoint = "public/time";
        let response: serde_json::Value = self.get(endpoint).await?;

        // OKX returns {"code":"0", "data":[...], "msg":""} for success
        if let Some(code) = response["code"].as_str() {
            if code == "0" {
                Ok(())
            } else {
                let msg = response["msg"].as_str().unwrap_or("Unknown error");
                Err(SpreadScannerError::ApiError(format!(
                    "OKX health check failed: {} - {}",
                    code, msg
                )))
            }
        } else {
            Err(SpreadScannerError::HealthCheckFailed)
        }
    }
}

#[async_trait]
impl TickerFeedTrait for OKX {
    fn exchange(&self) -> CexExchange {
        CexExchange::OKX
    }

    async fn fetch_tickers(&self) -> Result<serde_json::Value, SpreadScannerError> {
        let endpoint = "market/tickers?instType=SPOT";
        let response: serde_json::Value = self.get(endpoint).await?;

        // Check if API returned success
        if let Some(code) = response["code"].as_str() {
            if code != "0" {
                let msg = response["msg"].as_str().unwrap_or("Unknown error");
                return Err(SpreadScannerError::ApiError(format!(
                    "OKX API error: {} - {}",
                    code, msg
                )));
            }
        }

        Ok(response)
    }
}

/// Parse the full-ticker snapshot: records live under `data`, symbols carry
/// the "BTC-USDT" separator form.
pub fn parse_tickers(payload: &serde_json::Value) -> Result<Vec<PricePoint>, SpreadScannerError> {
    let response: OkxTickersResponse =
        serde_json::from_value(payload.clone()).map_err(|source| {
            SpreadScannerError::ParseError {
                exchange: "OKX",
                source,
            }
        })?;

    Ok(response
        .data
        .into_iter()
        .map(|t| PricePoint::new(normalize_symbol(&t.inst_id), t.last))
        .collect())
}
