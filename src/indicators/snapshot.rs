//! Latest-value snapshot of every configured indicator.

use tracing::debug;

use crate::config::IndicatorConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::series::get_current_value;
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::models::indicators::{
    AtrIndicator, BollingerBandsIndicator, Candle, EmaIndicator, IndicatorSet, MacdIndicator,
    RsiIndicator, SmaIndicator,
};

impl IndicatorSet {
    /// Recompute every indicator over the full candle history and keep the
    /// latest value of each.
    pub fn from_candles(symbol: &str, candles: &[Candle], config: &IndicatorConfig) -> Self {
        debug!(symbol = symbol, candles = candles.len(), "computing indicator set");

        let mut set = IndicatorSet::new(symbol.to_string());
        set.candle_count = candles.len();
        if let Some(last) = candles.last() {
            set = set.with_last_candle(last);
        }

        set.emas = config
            .ema_periods
            .iter()
            .map(|&period| EmaIndicator {
                value: get_current_value(&calculate_ema(candles, period)),
                period,
            })
            .collect();
        set.smas = config
            .sma_periods
            .iter()
            .map(|&period| SmaIndicator {
                value: get_current_value(&calculate_sma(candles, period)),
                period,
            })
            .collect();

        let (fast, slow, signal) = config.macd_periods;
        let macd = calculate_macd(candles, fast, slow, signal);
        let bands =
            calculate_bollinger_bands(candles, config.bollinger_period, config.bollinger_std_dev);

        set.with_rsi(RsiIndicator {
            value: get_current_value(&calculate_rsi(candles, config.rsi_period)),
            period: config.rsi_period,
        })
        .with_macd(MacdIndicator {
            macd: get_current_value(&macd.macd),
            signal: get_current_value(&macd.signal),
            histogram: get_current_value(&macd.histogram),
            period: config.macd_periods,
        })
        .with_bollinger(BollingerBandsIndicator {
            upper: get_current_value(&bands.upper),
            middle: get_current_value(&bands.middle),
            lower: get_current_value(&bands.lower),
            period: config.bollinger_period,
            std_dev: config.bollinger_std_dev,
        })
        .with_atr(AtrIndicator {
            value: get_current_value(&calculate_atr(candles, config.atr_period)),
            period: config.atr_period,
        })
        .with_levels(calculate_support_resistance(candles, config.sr_lookback))
    }
}
