pub mod client;
pub mod errors;
pub mod exchange;
pub mod price;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use errors::SpreadScannerError;
pub use exchange::{CexExchange, ExchangeTrait, TickerFeedTrait};
pub use price::PricePoint;
pub use utils::{get_timestamp_millis, normalize_symbol};
