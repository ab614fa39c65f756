use serde::Deserialize;

/// `market/tickers` response. Only the `result.list` nesting is required so
/// that a well-formed empty snapshot still parses; `retCode` is checked at
/// fetch time.
#[derive(Debug, Deserialize)]
pub struct BybitTickersResponse {
    pub result: BybitTickersResult,
}

#[derive(Debug, Deserialize)]
pub struct BybitTickersResult {
    pub list: Vec<BybitTickerData>,
}

#[derive(Debug, Deserialize)]
pub struct BybitTickerData {
    pub symbol: String,
    #[serde(rename = "lastPrice")]
    pub last_price: String,
}
