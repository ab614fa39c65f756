
use cex_spread_scanner::{CexExchange, PricePoint, SpreadScannerError};
use scanner_common::bybit_payload;
use serde_json::json;

#[test]
fn test_bybit_parse_tickers() {
    let payload = json!({"result": {"list": [{"symbol": "BTCUSDT", "lastPrice": "50500"}]}});

    let points = CexExchange::Bybit.parse_tickers(&payload).unwrap();

    assert_eq!(points, vec![PricePoint::new("BTCUSDT", "50500")]);
}

#[test]
fn test_bybit_parse_full_envelope() {
    let payload = bybit_payload(&[("BTCUSDT", "50500"), ("ETHUSDT", "3010")]);

    let points = CexExchange::Bybit.parse_tickers(&payload).unwrap();

    assert_eq!(
        points,
        vec![
            PricePoint::new("BTCUSDT", "50500"),
            PricePoint::new("ETHUSDT", "3010"),
        ]
    );
}

#[test]
fn test_bybit_parse_empty_snapshot_is_not_an_error() {
    let payload = json!({"result": {"list": []}});
    let points = CexExchange::Bybit.parse_tickers(&payload).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_bybit_parse_missing_result_key_fails_with_exchange_name() {
    let result = CexExchange::Bybit.parse_tickers(&json!({"list": []}));

    match result {
        Err(SpreadScannerError::ParseError { exchange, .. }) => {
            assert_eq!(exchange, "Bybit");
        }
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}
