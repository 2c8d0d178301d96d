//! Yahoo Finance chart API provider for daily equity bars.

use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataProvider;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct YahooFinanceProvider {
    client: Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at an alternate chart API host. Tests use this to
    /// inject a mock server.
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("Mozilla/5.0 (compatible; signalix/0.1)")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    async fn fetch_chart(&self, url: &str) -> Result<ChartResponse, MarketDataError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MarketDataError::Decode(e.to_string()))
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn daily_bars(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            symbol,
            start.timestamp(),
            end.timestamp()
        );

        // Transient transport failures get two backoff retries; HTTP error
        // statuses and malformed bodies do not.
        let chart = (|| self.fetch_chart(&url))
            .retry(ExponentialBuilder::default().with_max_times(2))
            .when(|e: &MarketDataError| matches!(e, MarketDataError::Http(_)))
            .notify(|e: &MarketDataError, dur: Duration| {
                warn!(symbol = %symbol, error = %e, "Retrying chart fetch in {:?}", dur);
            })
            .await?;

        if let Some(err) = chart.chart.error {
            return Err(MarketDataError::Decode(format!(
                "{}: {}",
                err.code, err.description
            )));
        }

        let result = chart
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| MarketDataError::Decode("chart result missing".to_string()))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::Decode("quote series missing".to_string()))?;

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            // Yahoo pads sparse days with nulls; a bar without a close is unusable.
            let close = match quote.close.get(i).copied().flatten() {
                Some(c) => c,
                None => continue,
            };
            let Some(timestamp) = DateTime::from_timestamp(*ts, 0) else {
                continue;
            };
            candles.push(Candle::new(
                quote.open.get(i).copied().flatten().unwrap_or(close),
                quote.high.get(i).copied().flatten().unwrap_or(close),
                quote.low.get(i).copied().flatten().unwrap_or(close),
                close,
                quote.volume.get(i).copied().flatten().unwrap_or(0.0),
                timestamp,
            ));
        }
        candles.sort_by_key(|c| c.timestamp);

        debug!(symbol = %symbol, count = candles.len(), "Fetched {} daily bars for {}", candles.len(), symbol);
        Ok(candles)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize, Default)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}
