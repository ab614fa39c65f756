
use cex_spread_scanner::{CexExchange, PricePoint, SpreadScannerError};
use scanner_common::binance_payload;
use serde_json::json;

#[test]
fn test_binance_parse_tickers() {
    let payload = binance_payload(&[("BTCUSDT", "50000"), ("ETHUSDT", "3000.50")]);

    let points = CexExchange::Binance.parse_tickers(&payload).unwrap();

    assert_eq!(
        points,
        vec![
            PricePoint::new("BTCUSDT", "50000"),
            PricePoint::new("ETHUSDT", "3000.50"),
        ]
    );
}

#[test]
fn test_binance_parse_empty_snapshot_is_not_an_error() {
    let points = CexExchange::Binance.parse_tickers(&json!([])).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_binance_parse_wrong_shape_fails_with_exchange_name() {
    // An object where the snapshot array is expected
    let result = CexExchange::Binance.parse_tickers(&json!({"symbols": []}));

    match result {
        Err(SpreadScannerError::ParseError { exchange, .. }) => {
            assert_eq!(exchange, "Binance");
        }
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_binance_parse_wrong_field_type_fails() {
    // Price as a JSON number instead of the documented string
    let payload = json!([{"symbol": "BTCUSDT", "price": 50000}]);

    let result = CexExchange::Binance.parse_tickers(&payload);
    assert!(matches!(
        result,
        Err(SpreadScannerError::ParseError {
            exchange: "Binance",
            ..
        })
    ));
}
