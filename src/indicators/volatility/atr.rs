//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::{Candle, Series};

/// Calculate ATR (Average True Range) with Wilder's smoothing
///
/// The first value, at index `period`, is the mean true range of candles
/// `1..=period`; the first candle has no previous close and no true range.
/// Returns an empty series when there are fewer than `period + 1` candles.
pub fn calculate_atr(candles: &[Candle], period: u32) -> Series {
    let period = period as usize;
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let tr_values: Vec<f64> = candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();

    let mut result = vec![None; candles.len()];
    let Some(mut atr) = math::mean(&tr_values[..period]) else {
        return Vec::new();
    };
    result[period] = Some(atr);

    // tr_values[i - 1] is the true range of candle i
    for i in (period + 1)..candles.len() {
        atr = math::wilder_smooth(atr, tr_values[i - 1], period);
        result[i] = Some(atr);
    }

    result
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Series {
    calculate_atr(candles, 14)
}
