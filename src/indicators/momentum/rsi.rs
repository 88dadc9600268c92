//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::{Candle, Series};

/// Calculate RSI with Wilder's smoothing
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The averages are seeded with the plain mean of the first `period` close
/// deltas, so the first value lands at index `period`. Returns an empty
/// series when there are fewer than `period + 1` candles.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Series {
    let period = period as usize;
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let mut result = vec![None; candles.len()];

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;
    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for i in (period + 1)..candles.len() {
        let change = candles[i].close - candles[i - 1].close;
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };

        avg_gain = math::wilder_smooth(avg_gain, gain, period);
        avg_loss = math::wilder_smooth(avg_loss, loss, period);
        result[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Series {
    calculate_rsi(candles, 14)
}

/// No losses saturates at 100, including the flat case where both averages are zero.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
