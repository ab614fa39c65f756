#[derive(thiserror::Error, Debug)]
pub enum SpreadScannerError {
    #[error("Health check failed")]
    HealthCheckFailed,

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    /// Malformed ticker payload from one exchange. The exchange's
    /// contribution is skipped for the cycle; the cycle itself continues.
    #[error("{exchange} ticker payload: {source}")]
    ParseError {
        exchange: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Arithmetic anomaly on a single symbol. The symbol is skipped;
    /// the cycle itself continues.
    #[error("{symbol}: {detail}")]
    ComputationError { symbol: String, detail: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    /// No exchange feeds were supplied at all. The only cycle-level failure.
    #[error("No exchange feeds supplied")]
    NoFeeds,
}
