//! RSI (Relative Strength Index) indicator

use crate::models::indicators::Candle;

/// Calculate RSI over the trailing `period` price deltas.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Uses a plain trailing mean of the signed deltas split into gain/loss
/// series, recomputed from scratch each window (no Wilder smoothing).
/// Degenerate windows are defined explicitly rather than left to float
/// division: no losses and no gains (flat window) is exactly 50.0, no
/// losses with gains present is 100.0. Returns None until `period + 1`
/// candles of history exist.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Option<f64> {
    if candles.len() < period + 1 {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for i in closes.len() - period..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += change.abs();
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return Some(50.0);
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with the default period (14).
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<f64> {
    calculate_rsi(candles, 14)
}
