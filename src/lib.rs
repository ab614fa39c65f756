//! `cex-spread-scanner`
//!
//! Poll full spot ticker snapshots from multiple CEX venues, unify prices by
//! symbol and flag cross-exchange spreads inside a configurable interval.
//!
//! ## Quickstart
//!
//! ```no_run
//! use cex_spread_scanner::{
//!     Binance, Bybit, CexExchange, ExchangeFeed, OKX, SpreadScanner, SymbolFilter,
//!     TickerFeedTrait,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cex_spread_scanner::SpreadScannerError> {
//! let feeds = vec![
//!     ExchangeFeed::new(CexExchange::Binance, Binance::new().fetch_tickers().await?),
//!     ExchangeFeed::new(CexExchange::OKX, OKX::new().fetch_tickers().await?),
//!     ExchangeFeed::new(CexExchange::Bybit, Bybit::new().fetch_tickers().await?),
//! ];
//!
//! let outcome = SpreadScanner::new().scan(&feeds, &SymbolFilter::new())?;
//! for opp in &outcome.opportunities {
//!     println!(
//!         "{}: buy on {} at {} / sell on {} at {} ({})",
//!         opp.symbol, opp.buy_exchange, opp.buy_price,
//!         opp.sell_exchange, opp.sell_price, opp.spread_display()
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Polling monitor
//!
//! ```no_run
//! use cex_spread_scanner::{MonitorConfig, SpreadMonitor};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cex_spread_scanner::SpreadScannerError> {
//! let config = MonitorConfig::from_env()?;
//! SpreadMonitor::new(config).run().await;
//! # Ok(())
//! # }
//! ```

pub mod cex;
pub mod common;
pub mod config;
pub mod monitor;
pub mod scanner;

// Re-export common types
pub use cex::{Binance, Bybit, OKX};

pub use common::{
    CexExchange, ExchangeTrait, PricePoint, SpreadScannerError, TickerFeedTrait,
    get_timestamp_millis, normalize_symbol,
};

pub use config::MonitorConfig;
pub use monitor::SpreadMonitor;
pub use scanner::{
    DEFAULT_MAX_SPREAD_PERCENT, DEFAULT_MIN_SPREAD_PERCENT, ExchangeFeed, FallbackPolicy,
    ScanOutcome, SpreadOpportunity, SpreadScanner, SpreadThresholds, SymbolFilter, UnifiedTable,
};
