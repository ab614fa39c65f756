use crate::common::CexExchange;
use std::collections::{HashMap, HashSet};

/// What [`SymbolFilter::permits`] answers when an exchange has a registered
/// allow-list that is currently empty (failed or not-yet-completed refresh).
///
/// `PassThrough` is the default: an empty list means "no information", not
/// "nothing is tradable". `RejectAll` is available for callers that would
/// rather go quiet than compare against possibly delisted pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    #[default]
    PassThrough,
    RejectAll,
}

/// Per-exchange allow-lists of currently tradable symbols.
///
/// Exchanges with no registered list are unconstrained. The list itself is
/// supplied and refreshed by the caller (see `Binance::fetch_tradable_symbols`);
/// the filter only answers membership.
#[derive(Debug, Clone, Default)]
pub struct SymbolFilter {
    allow_lists: HashMap<CexExchange, HashSet<String>>,
    fallback: FallbackPolicy,
}

impl SymbolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: FallbackPolicy) -> Self {
        Self {
            allow_lists: HashMap::new(),
            fallback,
        }
    }

    /// Register (or replace) the allow-list for one exchange.
    pub fn set_allow_list(&mut self, exchange: CexExchange, symbols: HashSet<String>) {
        self.allow_lists.insert(exchange, symbols);
    }

    /// Drop the allow-list for one exchange, leaving it unconstrained.
    pub fn clear_allow_list(&mut self, exchange: CexExchange) {
        self.allow_lists.remove(&exchange);
    }

    pub fn has_allow_list(&self, exchange: CexExchange) -> bool {
        self.allow_lists.contains_key(&exchange)
    }

    /// Whether `symbol` survives filtering for `exchange`.
    pub fn permits(&self, exchange: CexExchange, symbol: &str) -> bool {
        match self.allow_lists.get(&exchange) {
            None => true,
            Some(list) if list.is_empty() => self.fallback == FallbackPolicy::PassThrough,
            Some(list) => list.contains(symbol),
        }
    }
}
