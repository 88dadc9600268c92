//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::{closes, Candle, MacdSeries, Series};

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of the MACD line, starting where the MACD line starts
/// Histogram = MACD - Signal
///
/// All three series are aligned to `candles`. Returns three empty series
/// when there are fewer than `slow_period` candles.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    if slow_period == 0 || candles.len() < slow_period as usize {
        return MacdSeries::default();
    }

    let closes = closes(candles);
    let fast_ema = math::ema_series(&closes, fast_period as usize);
    let slow_ema = math::ema_series(&closes, slow_period as usize);

    let macd: Series = (0..candles.len())
        .map(|i| match (value_at(&fast_ema, i), value_at(&slow_ema, i)) {
            (Some(fast), Some(slow)) => Some(fast - slow),
            _ => None,
        })
        .collect();

    let signal = signal_line(&macd, signal_period as usize);

    let histogram: Series = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> MacdSeries {
    calculate_macd(candles, 12, 26, 9)
}

/// EMA of the contiguous present tail of the MACD line, placed back at the
/// offset where that tail begins.
fn signal_line(macd: &[Option<f64>], signal_period: usize) -> Series {
    let mut signal = vec![None; macd.len()];
    let Some(offset) = macd.iter().position(Option::is_some) else {
        return signal;
    };

    let tail: Vec<f64> = macd[offset..].iter().map_while(|v| *v).collect();
    for (j, value) in math::ema_series(&tail, signal_period).into_iter().enumerate() {
        signal[offset + j] = value;
    }
    signal
}

fn value_at(series: &[Option<f64>], index: usize) -> Option<f64> {
    series.get(index).copied().flatten()
}
