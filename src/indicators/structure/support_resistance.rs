//! Support and Resistance levels detection

use crate::models::indicators::{Candle, Level, SupportResistanceLevels};

/// Number of most recent levels kept per side
pub const MAX_LEVELS: usize = 3;

/// Calculate support and resistance levels
///
/// A candle is a support point when no other candle within `lookback` bars
/// on either side has a lower low, and a resistance point when none has a
/// higher high. Ties qualify, and one candle can be both. Only candles with
/// a full window on both sides are candidates. The last three levels of
/// each kind are returned, oldest first.
pub fn calculate_support_resistance(candles: &[Candle], lookback: usize) -> SupportResistanceLevels {
    if candles.len() < lookback {
        return SupportResistanceLevels::default();
    }

    let mut support = Vec::new();
    let mut resistance = Vec::new();

    for i in lookback..candles.len().saturating_sub(lookback) {
        let window = &candles[i - lookback..=i + lookback];
        let candle = &candles[i];

        if window.iter().all(|other| other.low >= candle.low) {
            support.push(Level {
                price: candle.low,
                index: i,
            });
        }
        if window.iter().all(|other| other.high <= candle.high) {
            resistance.push(Level {
                price: candle.high,
                index: i,
            });
        }
    }

    SupportResistanceLevels {
        support: keep_last(support),
        resistance: keep_last(resistance),
    }
}

/// Calculate support/resistance with default lookback (20)
pub fn calculate_support_resistance_default(candles: &[Candle]) -> SupportResistanceLevels {
    calculate_support_resistance(candles, 20)
}

fn keep_last(mut levels: Vec<Level>) -> Vec<Level> {
    let skip = levels.len().saturating_sub(MAX_LEVELS);
    levels.drain(..skip);
    levels
}
