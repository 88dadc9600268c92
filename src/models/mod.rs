//! Shared data models spanning the engine layers.

pub mod indicators;

pub use indicators::{
    AtrIndicator, BollingerBandsIndicator, BollingerSeries, Candle, EmaIndicator, IndicatorSet,
    Level, MacdIndicator, MacdSeries, RsiIndicator, Series, SmaIndicator,
    SupportResistanceLevels,
};
