
use cex_spread_scanner::{CexExchange, PricePoint, SpreadScannerError};
use scanner_common::okx_payload;
use serde_json::json;

#[test]
fn test_okx_parse_tickers_normalizes_symbols() {
    let payload = json!({"data": [{"instId": "BTC-USDT", "last": "50010"}]});

    let points = CexExchange::OKX.parse_tickers(&payload).unwrap();

    assert_eq!(points, vec![PricePoint::new("BTCUSDT", "50010")]);
}

#[test]
fn test_okx_parse_full_envelope() {
    // Extra envelope fields (code, msg) are tolerated
    let payload = okx_payload(&[("ETH-USDT", "3000"), ("SOL-USDT", "150.25")]);

    let points = CexExchange::OKX.parse_tickers(&payload).unwrap();

    assert_eq!(
        points,
        vec![
            PricePoint::new("ETHUSDT", "3000"),
            PricePoint::new("SOLUSDT", "150.25"),
        ]
    );
}

#[test]
fn test_okx_parse_empty_snapshot_is_not_an_error() {
    let points = CexExchange::OKX.parse_tickers(&json!({"data": []})).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_okx_parse_missing_data_key_fails_with_exchange_name() {
    let result = CexExchange::OKX.parse_tickers(&json!({"tickers": []}));

    match result {
        Err(SpreadScannerError::ParseError { exchange, .. }) => {
            assert_eq!(exchange, "OKX");
        }
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}
