//! Signal engine: price history in, classified signal out.

use crate::error::SignalError;
use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::calculate_ema;
use crate::models::indicators::Candle;
use crate::models::signal::{SignalBatch, SignalKind, SignalRecord};
use crate::services::market_data::MarketDataProvider;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const RSI_PERIOD: usize = 14;
pub const EMA_SHORT_PERIOD: usize = 20;
pub const EMA_LONG_PERIOD: usize = 50;

const DEFAULT_LOOKBACK_DAYS: i64 = 30;

pub struct SignalEngine {
    provider: Arc<dyn MarketDataProvider>,
    lookback_days: i64,
}

impl SignalEngine {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    pub fn with_lookback_days(mut self, lookback_days: i64) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    /// Fetch recent daily bars for one symbol, compute indicators on the
    /// latest bar, and classify.
    pub async fn generate_signal(&self, symbol: &str) -> Result<SignalRecord, SignalError> {
        let end = Utc::now();
        let start = end - Duration::days(self.lookback_days);

        let candles = self
            .provider
            .daily_bars(symbol, start, end)
            .await
            .map_err(|source| SignalError::Fetch {
                symbol: symbol.to_string(),
                source,
            })?;

        if candles.is_empty() {
            return Err(SignalError::NoData(symbol.to_string()));
        }

        let record = Self::evaluate(symbol, &candles)?;
        info!(symbol = %symbol, kind = %record.kind, "Generated signal for {}: {}", symbol, record.kind);
        Ok(record)
    }

    /// Classify a fetched series. Split out so tests can drive it with
    /// synthetic candles directly.
    pub fn evaluate(symbol: &str, candles: &[Candle]) -> Result<SignalRecord, SignalError> {
        let price = candles
            .last()
            .map(|c| c.close)
            .ok_or_else(|| SignalError::NoData(symbol.to_string()))?;

        // EMA is seeded-carry and always available for a non-empty series.
        let make_compute_err = |detail: &str| SignalError::Compute {
            symbol: symbol.to_string(),
            detail: detail.to_string(),
        };
        let ema_short = calculate_ema(candles, EMA_SHORT_PERIOD)
            .ok_or_else(|| make_compute_err("EMA20 unavailable"))?;
        let ema_long = calculate_ema(candles, EMA_LONG_PERIOD)
            .ok_or_else(|| make_compute_err("EMA50 unavailable"))?;
        let rsi = calculate_rsi(candles, RSI_PERIOD);

        let (kind, reason) = classify(price, rsi, ema_short, ema_long);

        Ok(SignalRecord {
            symbol: symbol.to_string(),
            price,
            rsi,
            ema_short,
            ema_long,
            kind,
            reason,
            generated_at: Utc::now(),
        })
    }

    /// Run every configured symbol in order. Per-symbol failures are logged
    /// and skipped; the batch is whatever succeeded, possibly empty.
    pub async fn generate_all_signals(&self, symbols: &[String]) -> SignalBatch {
        info!(symbol_count = symbols.len(), "Generating signals for {} symbols", symbols.len());

        let mut batch = SignalBatch::new();
        for symbol in symbols {
            match self.generate_signal(symbol).await {
                Ok(record) => batch.insert(record),
                Err(SignalError::NoData(_)) => {
                    warn!(symbol = %symbol, "No data found for {}", symbol);
                }
                Err(e) => {
                    error!(symbol = %symbol, error = %e, "Error generating signal for {}", symbol);
                }
            }
        }
        batch
    }
}

/// Classification on the latest bar only; first matching rule wins.
fn classify(price: f64, rsi: Option<f64>, ema_short: f64, ema_long: f64) -> (SignalKind, String) {
    let Some(rsi) = rsi else {
        return (
            SignalKind::Insufficient,
            format!("Fewer than {} bars of history for RSI", RSI_PERIOD + 1),
        );
    };

    if rsi < 30.0 && price > ema_short {
        (
            SignalKind::Buy,
            format!("RSI oversold ({:.2}) + Price above EMA20", rsi),
        )
    } else if rsi > 70.0 && price < ema_short {
        (
            SignalKind::Sell,
            format!("RSI overbought ({:.2}) + Price below EMA20", rsi),
        )
    } else if price > ema_long && ema_short > ema_long {
        (
            SignalKind::HoldBullish,
            "Price above EMA50 and uptrend".to_string(),
        )
    } else {
        (SignalKind::HoldNeutral, "No clear signal".to_string())
    }
}
