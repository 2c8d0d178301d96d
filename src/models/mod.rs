//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::Candle;
pub use signal::{SignalBatch, SignalKind, SignalRecord};
