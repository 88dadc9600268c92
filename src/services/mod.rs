//! Candle sources and the live candle buffer.

pub mod market_data;

pub use market_data::*;
