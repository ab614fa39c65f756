use serde::Deserialize;

/// `market/tickers` response. Only the `data` nesting is required so that
/// a well-formed empty snapshot still parses; the envelope code is checked
/// at fetch time.
#[derive(Debug, Deserialize)]
pub struct OkxTickersResponse {
    pub data: Vec<OkxTickerData>,
}

#[derive(Debug, Deserialize)]
pub struct OkxTickerData {
    #[serde(rename = "instId")]
    pub inst_id: String,
    pub last: String,
}
