//! Error taxonomy shared across the engine layers.

use thiserror::Error;

/// Errors from the price data service layer.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Per-symbol signal generation errors. These are isolated by the batch loop
/// and never abort a run.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("no price data returned for {0}")]
    NoData(String),

    #[error("failed to fetch prices for {symbol}: {source}")]
    Fetch {
        symbol: String,
        #[source]
        source: MarketDataError,
    },

    #[error("indicator computation failed for {symbol}: {detail}")]
    Compute { symbol: String, detail: String },
}

/// Message transport errors. Internal to the notifier: the public surface
/// converts these to a boolean result after logging.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Fatal startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
