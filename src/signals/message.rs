//! Message templates for the daily summary and operational notices.
//!
//! Formatting is pure: the same batch and date always produce the same text,
//! so the templates are directly unit-testable.

use crate::models::signal::SignalBatch;
use chrono::{DateTime, NaiveDate, Utc};

/// Fixed response for a run that produced nothing.
pub const NO_SIGNALS_MESSAGE: &str = "No signals generated today.";

/// Symbol as shown in the chat message: NSE suffix stripped for readability.
pub fn display_symbol(symbol: &str) -> &str {
    symbol.strip_suffix(".NS").unwrap_or(symbol)
}

/// Render the daily multi-section summary for a batch, in batch order.
pub fn format_signals_message(batch: &SignalBatch, date: NaiveDate) -> String {
    if batch.is_empty() {
        return NO_SIGNALS_MESSAGE.to_string();
    }

    let mut message = String::new();
    message.push_str("🤖 *AI Stock Signals - Daily Update*\n\n");
    message.push_str(&format!("📅 Date: {}\n", date.format("%Y-%m-%d")));
    message.push_str(&"=".repeat(35));
    message.push_str("\n\n");

    for record in batch.iter() {
        message.push_str(&format!("📊 *{}*\n", display_symbol(&record.symbol)));
        message.push_str(&format!("💰 Price: ₹{:.2}\n", record.price));
        match record.rsi {
            Some(rsi) => message.push_str(&format!("📈 RSI: {:.2}\n", rsi)),
            None => message.push_str("📈 RSI: n/a\n"),
        }
        message.push_str(&format!("🎯 Signal: *{}*\n", record.kind));
        message.push_str(&format!("📝 Reason: {}\n", record.reason));
        message.push_str(&"-".repeat(25));
        message.push_str("\n\n");
    }

    message.push_str(
        "⚠️ *Disclaimer:* Signals are for educational purposes only. Please do your own research before trading.\n",
    );
    message.push_str("🔄 Next update: Tomorrow at 9:30 AM");
    message
}

/// Heartbeat sent once the identity check passes at startup.
pub fn startup_message(at: DateTime<Utc>) -> String {
    format!(
        "🚀 *AI Signal Bot Started*\n\n⏰ Started at: {}\n🔄 Daily signals will be generated automatically\n📊 Monitoring Indian stock market signals\n\n✅ Bot is running successfully!",
        at.format("%d/%m/%Y %H:%M:%S")
    )
}
