use cex_spread_scanner::{CexExchange, FallbackPolicy, SymbolFilter};
use std::collections::HashSet;

fn allow_list(symbols: &[&str]) -> HashSet<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_unregistered_exchange_is_unconstrained() {
    let filter = SymbolFilter::new();
    assert!(filter.permits(CexExchange::Binance, "BTCUSDT"));
    assert!(filter.permits(CexExchange::OKX, "ANYTHING"));
}

#[test]
fn test_allow_list_restricts_membership() {
    let mut filter = SymbolFilter::new();
    filter.set_allow_list(CexExchange::Binance, allow_list(&["BTCUSDT", "ETHUSDT"]));

    assert!(filter.permits(CexExchange::Binance, "BTCUSDT"));
    assert!(!filter.permits(CexExchange::Binance, "DELISTEDUSDT"));

    // Other exchanges stay unconstrained
    assert!(filter.permits(CexExchange::Bybit, "DELISTEDUSDT"));
}

#[test]
fn test_empty_allow_list_passes_through_by_default() {
    // An empty list means "no information", not "nothing is tradable"
    let mut filter = SymbolFilter::new();
    filter.set_allow_list(CexExchange::Binance, HashSet::new());

    assert!(filter.permits(CexExchange::Binance, "BTCUSDT"));
}

#[test]
fn test_empty_allow_list_rejects_under_reject_all() {
    let mut filter = SymbolFilter::with_fallback(FallbackPolicy::RejectAll);
    filter.set_allow_list(CexExchange::Binance, HashSet::new());

    assert!(!filter.permits(CexExchange::Binance, "BTCUSDT"));

    // RejectAll only applies to the empty-list case; a populated list still
    // answers membership.
    filter.set_allow_list(CexExchange::Binance, allow_list(&["BTCUSDT"]));
    assert!(filter.permits(CexExchange::Binance, "BTCUSDT"));
}

#[test]
fn test_clear_allow_list_returns_to_unconstrained() {
    let mut filter = SymbolFilter::new();
    filter.set_allow_list(CexExchange::Binance, allow_list(&["BTCUSDT"]));
    assert!(!filter.permits(CexExchange::Binance, "ETHUSDT"));

    filter.clear_allow_list(CexExchange::Binance);
    assert!(!filter.has_allow_list(CexExchange::Binance));
    assert!(filter.permits(CexExchange::Binance, "ETHUSDT"));
}
