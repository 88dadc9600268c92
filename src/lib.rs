//! Candle indicator engine: moving averages, oscillators, volatility bands
//! and support/resistance detection over OHLCV sequences.

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;

pub use indicators::IndicatorError;
pub use models::indicators::{Candle, Series};
