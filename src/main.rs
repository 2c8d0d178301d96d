//! Daily signal run: generate signals for the configured watchlist and
//! deliver the summary to Telegram. Intended to be invoked once per day by
//! an external scheduler.

use dotenvy::dotenv;
use signalix::config::Config;
use signalix::logging;
use signalix::services::{TelegramNotifier, YahooFinanceProvider};
use signalix::signals::message::{format_signals_message, startup_message};
use signalix::signals::SignalEngine;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    let exit_code = tokio::select! {
        code = run() => code,
        _ = signal::ctrl_c() => {
            info!("Bot execution interrupted by user");
            0
        }
    };
    std::process::exit(exit_code);
}

async fn run() -> i32 {
    info!("Daily signal execution started");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Configuration error: {}", e);
            return 1;
        }
    };
    info!(
        symbol_count = config.symbols.len(),
        "Signal generator initialized with {} symbols",
        config.symbols.len()
    );

    let notifier = TelegramNotifier::new(&config.bot_token, &config.chat_id);
    if !notifier.test_connection().await {
        error!("Telegram bot connection failed");
        return 1;
    }

    // Heartbeat is best-effort; a failure here should not stop the run.
    notifier.send_message(&startup_message(chrono::Utc::now())).await;

    let provider = Arc::new(YahooFinanceProvider::new());
    let engine = SignalEngine::new(provider).with_lookback_days(config.lookback_days);

    let batch = engine.generate_all_signals(&config.symbols).await;
    if batch.is_empty() {
        warn!("No signals generated");
        notifier
            .send_error_notification(
                "No signals were generated today. Please check the signal generator.",
            )
            .await;
        return 1;
    }

    let formatted = format_signals_message(&batch, chrono::Utc::now().date_naive());
    if notifier.send_signal_message(&batch, &formatted).await {
        info!(
            symbol_count = batch.len(),
            "Daily signals sent successfully for {} symbols",
            batch.len()
        );
        0
    } else {
        error!("Failed to send signals to Telegram");
        1
    }
}
