pub mod binance;
pub mod bybit;
pub mod okx;

// Re-export
pub use binance::Binance;
pub use bybit::Bybit;
pub use okx::OKX;
