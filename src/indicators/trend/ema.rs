//! EMA (Exponential Moving Average) indicator

use crate::models::indicators::Candle;

/// Calculate EMA for a specific period.
///
/// Smoothing factor is 2 / (period + 1). The average is seeded with the
/// first close and carried forward bar by bar, so it is defined for any
/// non-empty series regardless of period. Returns None only for an empty
/// series or a zero period.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 {
        return None;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut closes = candles.iter().map(|c| c.close);
    let mut ema = closes.next()?;
    for close in closes {
        ema += alpha * (close - ema);
    }
    Some(ema)
}

/// Calculate multiple EMAs at once.
pub fn calculate_emas(candles: &[Candle], periods: &[usize]) -> Vec<(usize, f64)> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(candles, period).map(|v| (period, v)))
        .collect()
}
