//! External service integrations: price data and chat delivery.

pub mod market_data;
pub mod telegram;
pub mod yahoo;

pub use market_data::MarketDataProvider;
pub use telegram::TelegramNotifier;
pub use yahoo::YahooFinanceProvider;
