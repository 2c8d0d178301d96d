//! Per-symbol signal results and the per-run batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading posture classification for one symbol on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    Buy,
    Sell,
    HoldBullish,
    HoldNeutral,
    /// Not enough history to compute RSI; emitted instead of silently
    /// propagating NaN or dropping the symbol.
    Insufficient,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::HoldBullish => "HOLD (Bullish)",
            SignalKind::HoldNeutral => "HOLD",
            SignalKind::Insufficient => "INSUFFICIENT DATA",
        };
        f.write_str(label)
    }
}

/// One symbol's classified result. Created once per run, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRecord {
    pub symbol: String,
    /// Latest close.
    pub price: f64,
    /// None when the series is too short for RSI(14).
    pub rsi: Option<f64>,
    pub ema_short: f64,
    pub ema_long: f64,
    pub kind: SignalKind,
    pub reason: String,
    pub generated_at: DateTime<Utc>,
}

/// Signals produced by one run, ordered by the configured symbol order.
/// At most one record per symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalBatch {
    records: Vec<SignalRecord>,
}

impl SignalBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record for the same symbol.
    pub fn insert(&mut self, record: SignalRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.symbol == record.symbol) {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&SignalRecord> {
        self.records.iter().find(|r| r.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
