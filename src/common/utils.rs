// src/common/utils.rs

/// Normalize an exchange-native symbol to the canonical alphabet:
/// separator characters removed, uppercase. OKX's "BTC-USDT" becomes "BTCUSDT".
pub fn normalize_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '/'))
        .collect::<String>()
        .to_uppercase()
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
