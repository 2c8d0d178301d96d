//! Market data provider interface.

use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use chrono::{DateTime, Utc};

/// Source of historical daily price bars.
#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get daily candles for a symbol over `[start, end]`, ordered by
    /// timestamp ascending. An empty vector means the service had no data
    /// for the symbol in that range.
    async fn daily_bars(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
