//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::{closes, Candle, Series};

/// Calculate the SMA of closes over a trailing `period`-candle window
///
/// Returns an empty series when there are fewer than `period` candles.
pub fn calculate_sma(candles: &[Candle], period: u32) -> Series {
    if period == 0 || candles.len() < period as usize {
        return Vec::new();
    }

    math::sma_series(&closes(candles), period as usize)
}
