//! Monitor configuration - loads settings from environment variables.

use crate::common::SpreadScannerError;
use crate::scanner::{DEFAULT_MAX_SPREAD_PERCENT, DEFAULT_MIN_SPREAD_PERCENT, SpreadThresholds};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_ALLOW_LIST_REFRESH_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub thresholds: SpreadThresholds,
    pub poll_interval: Duration,
    pub allow_list_refresh_interval: Duration,
    /// Where raw and unified snapshots are written. `None` disables
    /// persistence.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: SpreadThresholds::default(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            allow_list_refresh_interval: Duration::from_secs(DEFAULT_ALLOW_LIST_REFRESH_SECS),
            snapshot_dir: None,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from environment variables (`.env` honored).
    pub fn from_env() -> Result<Self, SpreadScannerError> {
        dotenvy::dotenv().ok();

        let thresholds = SpreadThresholds {
            min_percent: env_decimal("MIN_SPREAD_PERCENT", DEFAULT_MIN_SPREAD_PERCENT)?,
            max_percent: env_decimal("MAX_SPREAD_PERCENT", DEFAULT_MAX_SPREAD_PERCENT)?,
        };

        if thresholds.max_percent <= thresholds.min_percent {
            return Err(SpreadScannerError::ConfigError(format!(
                "MAX_SPREAD_PERCENT ({}) must be greater than MIN_SPREAD_PERCENT ({})",
                thresholds.max_percent, thresholds.min_percent
            )));
        }

        Ok(Self {
            thresholds,
            poll_interval: Duration::from_secs(env_u64(
                "POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )?),
            allow_list_refresh_interval: Duration::from_secs(env_u64(
                "ALLOW_LIST_REFRESH_SECS",
                DEFAULT_ALLOW_LIST_REFRESH_SECS,
            )?),
            snapshot_dir: std::env::var("SNAPSHOT_DIR").ok().map(PathBuf::from),
        })
    }
}

fn env_decimal(key: &str, default: Decimal) -> Result<Decimal, SpreadScannerError> {
    match std::env::var(key) {
        Ok(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
            SpreadScannerError::ConfigError(format!(
                "{} must be a decimal number, got {:?}",
                key, raw
            ))
        }),
        Err(_) => Ok(default),
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64, SpreadScannerError> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            SpreadScannerError::ConfigError(format!(
                "{} must be a whole number of seconds, got {:?}",
                key, raw
            ))
        }),
        Err(_) => Ok(default),
    }
}
