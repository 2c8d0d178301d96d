//! Unit tests for message formatting

use chrono::{NaiveDate, TimeZone, Utc};
use signalix::models::signal::{SignalBatch, SignalKind, SignalRecord};
use signalix::signals::message::{
    display_symbol, format_signals_message, startup_message, NO_SIGNALS_MESSAGE,
};

fn record(symbol: &str, kind: SignalKind, rsi: Option<f64>) -> SignalRecord {
    SignalRecord {
        symbol: symbol.to_string(),
        price: 123.45,
        rsi,
        ema_short: 120.0,
        ema_long: 118.0,
        kind,
        reason: "No clear signal".to_string(),
        generated_at: Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap(),
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

#[test]
fn empty_batch_returns_the_sentinel() {
    let batch = SignalBatch::new();
    assert_eq!(format_signals_message(&batch, date()), NO_SIGNALS_MESSAGE);

    // Date-independent.
    let other = NaiveDate::from_ymd_opt(2031, 12, 24).unwrap();
    assert_eq!(format_signals_message(&batch, other), NO_SIGNALS_MESSAGE);
}

#[test]
fn two_symbols_appear_once_each_in_configured_order() {
    let mut batch = SignalBatch::new();
    batch.insert(record("RELIANCE.NS", SignalKind::HoldNeutral, Some(50.0)));
    batch.insert(record("TCS.NS", SignalKind::HoldBullish, Some(55.0)));

    let message = format_signals_message(&batch, date());

    assert_eq!(message.matches("*RELIANCE*").count(), 1);
    assert_eq!(message.matches("*TCS*").count(), 1);
    assert!(!message.contains(".NS"));

    let first = message.find("*RELIANCE*").unwrap();
    let second = message.find("*TCS*").unwrap();
    assert!(first < second);
}

#[test]
fn message_carries_date_header_and_disclaimer() {
    let mut batch = SignalBatch::new();
    batch.insert(record("ITC.NS", SignalKind::Buy, Some(25.0)));

    let message = format_signals_message(&batch, date());
    assert!(message.contains("📅 Date: 2024-06-03"));
    assert!(message.contains("*Disclaimer:*"));
    assert!(message.contains("🎯 Signal: *BUY*"));
    assert!(message.contains("💰 Price: ₹123.45"));
    assert!(message.contains("📈 RSI: 25.00"));
}

#[test]
fn insufficient_record_renders_without_an_rsi_value() {
    let mut batch = SignalBatch::new();
    batch.insert(record("SBIN.NS", SignalKind::Insufficient, None));

    let message = format_signals_message(&batch, date());
    assert!(message.contains("📈 RSI: n/a"));
    assert!(message.contains("🎯 Signal: *INSUFFICIENT DATA*"));
}

#[test]
fn formatting_is_idempotent_for_a_fixed_date() {
    let mut batch = SignalBatch::new();
    batch.insert(record("RELIANCE.NS", SignalKind::HoldNeutral, Some(50.0)));
    batch.insert(record("^NSEI", SignalKind::HoldBullish, Some(60.0)));

    let first = format_signals_message(&batch, date());
    let second = format_signals_message(&batch, date());
    assert_eq!(first, second);
}

#[test]
fn display_symbol_strips_only_the_nse_suffix() {
    assert_eq!(display_symbol("RELIANCE.NS"), "RELIANCE");
    assert_eq!(display_symbol("^NSEI"), "^NSEI");
    assert_eq!(display_symbol("BAJAJ-AUTO.NS"), "BAJAJ-AUTO");
}

#[test]
fn startup_message_is_deterministic_for_a_fixed_instant() {
    let at = Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap();
    let message = startup_message(at);
    assert!(message.contains("*AI Signal Bot Started*"));
    assert!(message.contains("03/06/2024 09:30:00"));
    assert_eq!(message, startup_message(at));
}
