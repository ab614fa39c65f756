//! The polling collaborator around the scan pipeline: concurrent ticker
//! fetches, periodic allow-list refresh, snapshot persistence and reporting.
//! The pipeline itself stays free of I/O.

use crate::cex::{Binance, Bybit, OKX};
use crate::common::{CexExchange, ExchangeTrait, SpreadScannerError, TickerFeedTrait};
use crate::config::MonitorConfig;
use crate::scanner::{ExchangeFeed, ScanOutcome, SpreadScanner, SymbolFilter};
use futures::future::join_all;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct SpreadMonitor {
    config: MonitorConfig,
    scanner: SpreadScanner,
    filter: SymbolFilter,
    last_allow_list_refresh: Option<Instant>,
}

impl SpreadMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        let scanner = SpreadScanner::with_thresholds(config.thresholds);
        Self {
            config,
            scanner,
            filter: SymbolFilter::new(),
            last_allow_list_refresh: None,
        }
    }

    /// Poll forever: fetch, scan, report, sleep. A failed cycle is logged
    /// and retried on the next interval.
    pub async fn run(mut self) {
        self.health_check_all().await;

        loop {
            let started = Instant::now();
            match self.run_cycle().await {
                Ok(outcome) => self.report(&outcome, started.elapsed()),
                Err(e) => warn!("cycle failed: {e}"),
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// One fetch -> scan -> persist pass.
    pub async fn run_cycle(&mut self) -> Result<ScanOutcome, SpreadScannerError> {
        self.refresh_allow_list_if_due().await;

        let feeds = Self::fetch_feeds().await;
        if feeds.is_empty() {
            return Err(SpreadScannerError::NoFeeds);
        }

        let outcome = self.scanner.scan(&feeds, &self.filter)?;

        if let Some(dir) = &self.config.snapshot_dir {
            persist_snapshots(dir, &feeds, &outcome).await;
        }

        Ok(outcome)
    }

    async fn health_check_all(&self) {
        let exchanges = CexExchange::all();
        let futures: Vec<_> = exchanges.iter().map(Self::health_check_one).collect();
        let results = join_all(futures).await;

        for (exchange, result) in exchanges.iter().zip(results) {
            match result {
                Ok(()) => info!("{} reachable", exchange.name()),
                Err(e) => warn!("{} health check failed: {e}", exchange.name()),
            }
        }
    }

    async fn health_check_one(exchange: &CexExchange) -> Result<(), SpreadScannerError> {
        match exchange {
            CexExchange::Binance => Binance::new().health_check().await,
            CexExchange::OKX => OKX::new().health_check().await,
            CexExchange::Bybit => Bybit::new().health_check().await,
        }
    }

    /// Fetch all ticker snapshots in parallel. An exchange that fails is
    /// dropped for this cycle with a warning; the rest still get compared.
    async fn fetch_feeds() -> Vec<ExchangeFeed> {
        let exchanges = CexExchange::all();
        let futures: Vec<_> = exchanges.iter().map(Self::fetch_one).collect();
        let results = join_all(futures).await;

        let mut feeds = Vec::new();
        for (exchange, result) in exchanges.iter().zip(results) {
            match result {
                Ok(payload) => feeds.push(ExchangeFeed::new(*exchange, payload)),
                Err(e) => warn!("failed to fetch {} tickers: {e}", exchange.name()),
            }
        }
        feeds
    }

    async fn fetch_one(exchange: &CexExchange) -> Result<serde_json::Value, SpreadScannerError> {
        match exchange {
            CexExchange::Binance => Binance::new().fetch_tickers().await,
            CexExchange::OKX => OKX::new().fetch_tickers().await,
            CexExchange::Bybit => Bybit::new().fetch_tickers().await,
        }
    }

    /// Refresh the Binance allow-list on its own (longer) interval.
    /// A failed refresh keeps the previous list; an empty or missing list
    /// never silently rejects every symbol (see [`SymbolFilter`]).
    async fn refresh_allow_list_if_due(&mut self) {
        let due = match self.last_allow_list_refresh {
            None => true,
            Some(at) => at.elapsed() >= self.config.allow_list_refresh_interval,
        };
        if !due {
            return;
        }

        match Binance::new().fetch_tradable_symbols().await {
            Ok(symbols) => {
                info!(
                    "Binance allow-list refreshed: {} tradable symbols",
                    symbols.len()
                );
                self.filter.set_allow_list(CexExchange::Binance, symbols);
            }
            Err(e) => {
                warn!("Binance allow-list refresh failed, keeping previous list: {e}");
            }
        }
        self.last_allow_list_refresh = Some(Instant::now());
    }

    fn report(&self, outcome: &ScanOutcome, latency: Duration) {
        for issue in &outcome.issues {
            warn!("{issue}");
        }

        for opp in &outcome.opportunities {
            info!(
                "{}: buy on {} at {} / sell on {} at {} (spread {})",
                opp.symbol,
                opp.buy_exchange,
                opp.buy_price,
                opp.sell_exchange,
                opp.sell_price,
                opp.spread_display()
            );
        }

        info!(
            "cycle done: {} symbols compared, {} opportunities ({:.3}s)",
            outcome.table.len(),
            outcome.opportunities.len(),
            latency.as_secs_f64()
        );
    }
}

/// Write the raw per-exchange payloads and the pruned unified table into
/// `dir`. Write failures warn; they never abort the cycle.
async fn persist_snapshots(dir: &Path, feeds: &[ExchangeFeed], outcome: &ScanOutcome) {
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        warn!("failed to create snapshot dir {}: {e}", dir.display());
        return;
    }

    for feed in feeds {
        let path = dir.join(format!(
            "prices_{}.json",
            feed.exchange.name().to_lowercase()
        ));
        write_json(&path, &feed.payload).await;
    }

    write_json(&dir.join("unified_prices.json"), &outcome.table).await;
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) {
    match serde_json::to_vec_pretty(value) {
        Ok(bytes) => {
            if let Err(e) = tokio::fs::write(path, bytes).await {
                warn!("failed to write {}: {e}", path.display());
            }
        }
        Err(e) => warn!("failed to serialize {}: {e}", path.display()),
    }
}
