//! Indicator registry: named, parameterized indicators that produce
//! chart-aligned series.

use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::models::indicators::{Candle, Series};

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
}

/// A series-producing indicator with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorKind {
    Ema(u32),
    Sma(u32),
    Rsi(u32),
    Macd { fast: u32, slow: u32, signal: u32 },
    Bollinger { period: u32, std_dev: f64 },
    Atr(u32),
}

impl IndicatorKind {
    /// Get the category this indicator belongs to
    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Ema(_) | IndicatorKind::Sma(_) => IndicatorCategory::Trend,
            IndicatorKind::Rsi(_) | IndicatorKind::Macd { .. } => IndicatorCategory::Momentum,
            IndicatorKind::Bollinger { .. } | IndicatorKind::Atr(_) => {
                IndicatorCategory::Volatility
            }
        }
    }

    /// Short name, e.g. `ema9` or `rsi14`
    pub fn name(&self) -> String {
        match self {
            IndicatorKind::Ema(period) => format!("ema{}", period),
            IndicatorKind::Sma(period) => format!("sma{}", period),
            IndicatorKind::Rsi(period) => format!("rsi{}", period),
            IndicatorKind::Macd { .. } => "macd".to_string(),
            IndicatorKind::Bollinger { .. } => "bb".to_string(),
            IndicatorKind::Atr(period) => format!("atr{}", period),
        }
    }

    /// Compute every series this indicator produces, labelled for charting.
    ///
    /// Compound indicators yield one labelled series per line, e.g.
    /// `macd`, `macd_signal` and `macd_histogram`.
    pub fn compute(&self, candles: &[Candle]) -> Vec<(String, Series)> {
        match *self {
            IndicatorKind::Ema(period) => vec![(self.name(), calculate_ema(candles, period))],
            IndicatorKind::Sma(period) => vec![(self.name(), calculate_sma(candles, period))],
            IndicatorKind::Rsi(period) => vec![(self.name(), calculate_rsi(candles, period))],
            IndicatorKind::Atr(period) => vec![(self.name(), calculate_atr(candles, period))],
            IndicatorKind::Macd { fast, slow, signal } => {
                let macd = calculate_macd(candles, fast, slow, signal);
                vec![
                    ("macd".to_string(), macd.macd),
                    ("macd_signal".to_string(), macd.signal),
                    ("macd_histogram".to_string(), macd.histogram),
                ]
            }
            IndicatorKind::Bollinger { period, std_dev } => {
                let bands = calculate_bollinger_bands(candles, period, std_dev);
                vec![
                    ("bb_upper".to_string(), bands.upper),
                    ("bb_middle".to_string(), bands.middle),
                    ("bb_lower".to_string(), bands.lower),
                ]
            }
        }
    }
}
