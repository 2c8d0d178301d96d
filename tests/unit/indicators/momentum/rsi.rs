//! Unit tests for the RSI indicator

use chrono::{Duration, TimeZone, Utc};
use signalix::indicators::momentum::{calculate_rsi, calculate_rsi_default};
use signalix::models::indicators::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + 0.5,
                close - 0.5,
                close,
                1000.0,
                base + Duration::days(i as i64),
            )
        })
        .collect()
}

#[test]
fn rsi_insufficient_history() {
    // 14 candles give only 13 deltas, one short of a full window.
    let closes: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    assert!(calculate_rsi(&candles, 14).is_none());
}

#[test]
fn rsi_flat_series_is_exactly_fifty() {
    let candles = candles_from_closes(&[100.0; 20]);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert_eq!(rsi, 50.0);
}

#[test]
fn rsi_all_gains_is_one_hundred() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert_eq!(rsi, 100.0);
}

#[test]
fn rsi_balanced_gains_and_losses_is_fifty() {
    // Alternating +1/-1 deltas: equal average gain and loss.
    let mut closes = vec![100.0];
    for i in 0..14 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 1.0 } else { last - 1.0 });
    }
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!((rsi - 50.0).abs() < 1e-9);
}

#[test]
fn rsi_known_window_value() {
    // One -42 delta, twelve flat bars, one +14 delta: avg gain 1, avg loss 3,
    // RS = 1/3, RSI = 25.
    let mut closes = vec![100.0];
    closes.extend(std::iter::repeat(58.0).take(13));
    closes.push(72.0);
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!((rsi - 25.0).abs() < 1e-9);
}

#[test]
fn rsi_uses_trailing_window_only() {
    // Heavy early losses outside the trailing 14-delta window must not
    // affect the value: the last 14 deltas are all +1.
    let mut closes = vec![100.0, 50.0, 40.0, 30.0];
    for i in 0..14 {
        closes.push(30.0 + (i + 1) as f64);
    }
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert_eq!(rsi, 100.0);
}
