//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::{closes, Candle, Series};

/// Calculate the EMA of closes for every candle
///
/// The first value sits at index `period - 1` and is the SMA of the first
/// `period` closes; every later value applies `k = 2 / (period + 1)`.
/// Returns an empty series when there are fewer than `period` candles.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Series {
    if period == 0 || candles.len() < period as usize {
        return Vec::new();
    }

    math::ema_series(&closes(candles), period as usize)
}

/// Calculate multiple EMAs at once, in the order of `periods`
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<(u32, Series)> {
    periods
        .iter()
        .map(|&period| (period, calculate_ema(candles, period)))
        .collect()
}
