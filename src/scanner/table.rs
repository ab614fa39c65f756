use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Unified price table: canonical symbol -> exchange name -> last price.
///
/// Both levels are ordered maps, so iteration (and the serialized snapshot)
/// is deterministic regardless of the order exchanges were merged in.
/// Rebuilt from scratch every cycle; nothing survives between cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UnifiedTable {
    quotes: BTreeMap<String, BTreeMap<&'static str, Decimal>>,
}

impl UnifiedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one quote. Last write wins if the same exchange reports the
    /// same symbol twice.
    pub fn insert(&mut self, symbol: String, exchange: &'static str, price: Decimal) {
        self.quotes.entry(symbol).or_default().insert(exchange, price);
    }

    /// Drop symbols quoted by fewer than two exchanges; they have no
    /// cross-exchange spread to compare.
    pub fn prune_single_source(&mut self) {
        self.quotes.retain(|_, prices| prices.len() >= 2);
    }

    pub fn get(&self, symbol: &str) -> Option<&BTreeMap<&'static str, Decimal>> {
        self.quotes.get(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<&'static str, Decimal>)> {
        self.quotes.iter()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
