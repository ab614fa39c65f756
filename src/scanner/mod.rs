use crate::common::{CexExchange, PricePoint, SpreadScannerError, get_timestamp_millis};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

mod filter;
mod opportunity;
mod table;

pub use filter::{FallbackPolicy, SymbolFilter};
pub use opportunity::SpreadOpportunity;
pub use table::UnifiedTable;

pub const DEFAULT_MIN_SPREAD_PERCENT: Decimal = dec!(2);
pub const DEFAULT_MAX_SPREAD_PERCENT: Decimal = dec!(500);

/// One exchange's raw full-ticker snapshot for a cycle, as fetched.
#[derive(Debug, Clone)]
pub struct ExchangeFeed {
    pub exchange: CexExchange,
    pub payload: serde_json::Value,
}

impl ExchangeFeed {
    pub fn new(exchange: CexExchange, payload: serde_json::Value) -> Self {
        Self { exchange, payload }
    }
}

/// Percentage bounds for reportable spreads, exclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadThresholds {
    pub min_percent: Decimal,
    pub max_percent: Decimal,
}

impl Default for SpreadThresholds {
    fn default() -> Self {
        Self {
            min_percent: DEFAULT_MIN_SPREAD_PERCENT,
            max_percent: DEFAULT_MAX_SPREAD_PERCENT,
        }
    }
}

/// Result of one scan cycle. Per-exchange and per-symbol failures are
/// collected in `issues` alongside the successful results; they never abort
/// the cycle.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The pruned unified table, for callers that choose to persist it.
    pub table: UnifiedTable,
    /// Opportunities inside the threshold interval, widest spread first.
    pub opportunities: Vec<SpreadOpportunity>,
    pub issues: Vec<SpreadScannerError>,
    pub timestamp: u64,
}

/// Spread scanner - parses raw exchange snapshots, unifies prices by symbol
/// and flags symbols whose cross-exchange spread falls inside the threshold
/// interval.
///
/// Every step is a pure function of its inputs; no state survives between
/// cycles, so running the same inputs twice yields identical output.
pub struct SpreadScanner {
    thresholds: SpreadThresholds,
}

impl SpreadScanner {
    pub fn new() -> Self {
        Self {
            thresholds: SpreadThresholds::default(),
        }
    }

    pub fn with_thresholds(thresholds: SpreadThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SpreadThresholds {
        &self.thresholds
    }

    /// Run the full pipeline for one cycle: parse each feed, aggregate,
    /// detect.
    ///
    /// A feed that fails to parse is skipped and reported in the outcome's
    /// `issues`; the remaining exchanges still produce results. The only
    /// error is [`SpreadScannerError::NoFeeds`], when `feeds` is empty.
    pub fn scan(
        &self,
        feeds: &[ExchangeFeed],
        filter: &SymbolFilter,
    ) -> Result<ScanOutcome, SpreadScannerError> {
        if feeds.is_empty() {
            return Err(SpreadScannerError::NoFeeds);
        }

        let mut issues = Vec::new();
        let mut parsed: Vec<(CexExchange, Vec<PricePoint>)> = Vec::new();

        for feed in feeds {
            match feed.exchange.parse_tickers(&feed.payload) {
                Ok(points) => parsed.push((feed.exchange, points)),
                Err(e) => issues.push(e),
            }
        }

        let table = if parsed.is_empty() {
            UnifiedTable::new()
        } else {
            let (table, mut aggregate_issues) = Self::aggregate(&parsed, filter)?;
            issues.append(&mut aggregate_issues);
            table
        };

        let (opportunities, mut detect_issues) = self.detect(&table);
        issues.append(&mut detect_issues);

        Ok(ScanOutcome {
            table,
            opportunities,
            issues,
            timestamp: get_timestamp_millis(),
        })
    }

    /// Merge per-exchange price points into a unified table.
    ///
    /// The filter is consulted per point before insertion; last write wins
    /// when one exchange repeats a symbol; non-positive prices are excluded;
    /// unparsable prices are skipped and reported. Symbols left with fewer
    /// than two exchanges are pruned.
    pub fn aggregate(
        feeds: &[(CexExchange, Vec<PricePoint>)],
        filter: &SymbolFilter,
    ) -> Result<(UnifiedTable, Vec<SpreadScannerError>), SpreadScannerError> {
        if feeds.is_empty() {
            return Err(SpreadScannerError::NoFeeds);
        }

        let mut table = UnifiedTable::new();
        let mut issues = Vec::new();

        for (exchange, points) in feeds {
            let name = exchange.name();
            for point in points {
                if !filter.permits(*exchange, &point.symbol) {
                    continue;
                }

                let price = match Decimal::from_str(point.price.trim()) {
                    Ok(p) => p,
                    Err(_) => {
                        issues.push(SpreadScannerError::ComputationError {
                            symbol: point.symbol.clone(),
                            detail: format!("unparsable price {:?} from {}", point.price, name),
                        });
                        continue;
                    }
                };

                // Zero and negative quotes carry no spread information
                if price <= Decimal::ZERO {
                    continue;
                }

                table.insert(point.symbol.clone(), name, price);
            }
        }

        table.prune_single_source();
        Ok((table, issues))
    }

    /// Find symbols whose spread lies strictly inside the threshold interval.
    ///
    /// Per symbol: exchanges quoting a price <= 0 are excluded; fewer than
    /// two remaining exchanges skips the symbol. Buy is the minimum price,
    /// sell the maximum; ties go to the first exchange in the table's
    /// (alphabetical) iteration order - implementation-defined but stable
    /// within a run. The spread is computed in exact decimal arithmetic.
    pub fn detect(
        &self,
        table: &UnifiedTable,
    ) -> (Vec<SpreadOpportunity>, Vec<SpreadScannerError>) {
        let mut opportunities = Vec::new();
        let mut issues = Vec::new();

        for (symbol, quotes) in table.iter() {
            // Aggregation already excludes non-positive prices; re-check so
            // the division below can never see a zero buy price.
            let priced: Vec<(&'static str, Decimal)> = quotes
                .iter()
                .filter(|(_, price)| **price > Decimal::ZERO)
                .map(|(exchange, price)| (*exchange, *price))
                .collect();

            if priced.len() < 2 {
                continue;
            }

            let mut buy = priced[0];
            let mut sell = priced[0];
            for &(exchange, price) in &priced[1..] {
                if price < buy.1 {
                    buy = (exchange, price);
                }
                if price > sell.1 {
                    sell = (exchange, price);
                }
            }

            let ratio = match sell.1.checked_div(buy.1) {
                Some(r) => r,
                None => {
                    issues.push(SpreadScannerError::ComputationError {
                        symbol: symbol.clone(),
                        detail: format!("division failed for {} / {}", sell.1, buy.1),
                    });
                    continue;
                }
            };
            let spread_percent = (ratio - Decimal::ONE) * Decimal::ONE_HUNDRED;

            if spread_percent > self.thresholds.min_percent
                && spread_percent < self.thresholds.max_percent
            {
                opportunities.push(SpreadOpportunity {
                    symbol: symbol.clone(),
                    buy_exchange: buy.0.to_string(),
                    sell_exchange: sell.0.to_string(),
                    buy_price: buy.1,
                    sell_price: sell.1,
                    spread_percent,
                });
            }
        }

        // Widest spread first; the sort is stable, so equal spreads keep
        // symbol order.
        opportunities.sort_by(|a, b| b.spread_percent.cmp(&a.spread_percent));

        (opportunities, issues)
    }
}
