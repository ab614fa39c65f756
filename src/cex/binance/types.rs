use serde::Deserialize;

/// One entry of the full `ticker/price` snapshot.
#[derive(Debug, Deserialize)]
pub struct BinanceTickerEntry {
    pub symbol: String,
    pub price: String,
}

/// `exchangeInfo` response, reduced to the fields the allow-list needs.
#[derive(Debug, Deserialize)]
pub struct BinanceExchangeInfo {
    pub symbols: Vec<BinanceSymbolInfo>,
}

#[derive(Debug, Deserialize)]
pub struct BinanceSymbolInfo {
    pub symbol: String,
    pub status: String,
}
