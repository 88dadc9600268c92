//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::{closes, BollingerSeries, Candle};

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The deviation is the population standard deviation of the window's
/// closes about the middle band. Returns three empty series when there are
/// fewer than `period` candles.
pub fn calculate_bollinger_bands(candles: &[Candle], period: u32, std_dev: f64) -> BollingerSeries {
    let period = period as usize;
    if period == 0 || candles.len() < period {
        return BollingerSeries::default();
    }

    let closes = closes(candles);
    let middle = math::sma_series(&closes, period);
    let mut upper = vec![None; candles.len()];
    let mut lower = vec![None; candles.len()];

    for i in (period - 1)..candles.len() {
        let Some(mid) = middle[i] else {
            continue;
        };
        let Some(sd) = math::standard_deviation(&closes[i + 1 - period..=i], mid) else {
            continue;
        };
        upper[i] = Some(mid + std_dev * sd);
        lower[i] = Some(mid - std_dev * sd);
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> BollingerSeries {
    calculate_bollinger_bands(candles, 20, 2.0)
}
