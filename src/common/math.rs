//! Plain-slice numeric primitives.
//!
//! Every `*_series` function returns either an empty vector (not enough
//! values) or a vector with exactly one entry per input value.

use crate::models::indicators::Series;

/// Arithmetic mean of a slice. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// EMA smoothing factor `2 / (period + 1)`
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = ema_multiplier(period);
    value * k + previous * (1.0 - k)
}

/// Wilder's smoothing step: `(previous * (period - 1) + value) / period`
pub fn wilder_smooth(previous: f64, value: f64, period: usize) -> f64 {
    (previous * (period as f64 - 1.0) + value) / period as f64
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let high_low = high - low;
    let high_close = (high - prev_close).abs();
    let low_close = (low - prev_close).abs();
    high_low.max(high_close).max(low_close)
}

/// Population standard deviation of `values` about a given `center`.
pub fn standard_deviation(values: &[f64], center: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let squared: f64 = values.iter().map(|v| (v - center).powi(2)).sum();
    Some((squared / values.len() as f64).sqrt())
}

/// Simple moving average over a trailing window.
///
/// Each window is summed from scratch so results do not drift with the
/// length of the input.
pub fn sma_series(values: &[f64], period: usize) -> Series {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let mut result = vec![None; values.len()];
    for i in (period - 1)..values.len() {
        result[i] = mean(&values[i + 1 - period..=i]);
    }
    result
}

/// Exponential moving average seeded with the SMA of the first `period` values.
pub fn ema_series(values: &[f64], period: usize) -> Series {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let mut result = vec![None; values.len()];
    let Some(mut ema) = mean(&values[..period]) else {
        return Vec::new();
    };
    result[period - 1] = Some(ema);

    for i in period..values.len() {
        ema = ema_from_previous(values[i], ema, period);
        result[i] = Some(ema);
    }
    result
}
