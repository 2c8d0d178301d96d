//! Runtime configuration loaded from the process environment.

use crate::error::ConfigError;
use std::env;

/// NSE large caps tracked by default when no WATCHLIST override is set.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "RELIANCE.NS",
    "TCS.NS",
    "HDFCBANK.NS",
    "ICICIBANK.NS",
    "INFY.NS",
    "HINDUNILVR.NS",
    "ITC.NS",
    "BHARTIARTL.NS",
    "ASIANPAINT.NS",
    "LT.NS",
    "SBIN.NS",
    "AXISBANK.NS",
    "KOTAKBANK.NS",
    "BAJFINANCE.NS",
    "SUNPHARMA.NS",
    "TITAN.NS",
    "TECHM.NS",
    "ULTRACEMCO.NS",
    "POWERGRID.NS",
    "NTPC.NS",
    "MARUTI.NS",
    "NESTLEIND.NS",
    "TATAMOTORS.NS",
    "TATASTEEL.NS",
    "WIPRO.NS",
    "M&M.NS",
    "BAJAJ-AUTO.NS",
    "DRREDDY.NS",
    "CIPLA.NS",
    "INDUSINDBK.NS",
];

const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub symbols: Vec<String>,
    pub lookback_days: i64,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID are required; the run must not
    /// start without them. WATCHLIST and LOOKBACK_DAYS are optional overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Pure, so tests
    /// can inject fake environments without touching process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("TELEGRAM_BOT_TOKEN"))?;
        let chat_id = lookup("TELEGRAM_CHAT_ID")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("TELEGRAM_CHAT_ID"))?;

        let symbols = match lookup("WATCHLIST") {
            Some(raw) if !raw.trim().is_empty() => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        };

        let lookback_days = match lookup("LOOKBACK_DAYS") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|d| *d > 0)
                .ok_or(ConfigError::Invalid {
                    name: "LOOKBACK_DAYS",
                    value: raw,
                })?,
            None => DEFAULT_LOOKBACK_DAYS,
        };

        Ok(Self {
            bot_token,
            chat_id,
            symbols,
            lookback_days,
        })
    }
}
