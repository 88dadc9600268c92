//! Environment-driven configuration.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

use crate::indicators::error::IndicatorError;
use crate::indicators::parser::{parse_f64, parse_u32};
use crate::indicators::registry::IndicatorKind;

/// Deployment environment, read from `ENVIRONMENT` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Periods and multipliers for every computed indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub ema_periods: Vec<u32>,
    pub sma_periods: Vec<u32>,
    pub rsi_period: u32,
    pub macd_periods: (u32, u32, u32),
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
    pub atr_period: u32,
    pub sr_lookback: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ema_periods: vec![9, 21],
            sma_periods: vec![20],
            rsi_period: 14,
            macd_periods: (12, 26, 9),
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            atr_period: 14,
            sr_lookback: 20,
        }
    }
}

impl IndicatorConfig {
    /// Read overrides from the process environment.
    ///
    /// Recognized keys: `EMA_PERIODS`, `SMA_PERIODS` (comma separated),
    /// `RSI_PERIOD`, `MACD_PERIODS` (`fast,slow,signal`), `BOLLINGER_PERIOD`,
    /// `BOLLINGER_STD_DEV`, `ATR_PERIOD`, `SR_LOOKBACK`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Values that fail to parse
    /// are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_with(&lookup, "EMA_PERIODS", parse_period_list, &mut config.ema_periods);
        override_with(&lookup, "SMA_PERIODS", parse_period_list, &mut config.sma_periods);
        override_with(&lookup, "RSI_PERIOD", parse_u32, &mut config.rsi_period);
        override_with(&lookup, "MACD_PERIODS", parse_macd_periods, &mut config.macd_periods);
        override_with(&lookup, "BOLLINGER_PERIOD", parse_u32, &mut config.bollinger_period);
        override_with(&lookup, "BOLLINGER_STD_DEV", parse_f64, &mut config.bollinger_std_dev);
        override_with(&lookup, "ATR_PERIOD", parse_u32, &mut config.atr_period);
        override_with(
            &lookup,
            "SR_LOOKBACK",
            |value| parse_u32(value).map(|v| v as usize),
            &mut config.sr_lookback,
        );

        config
    }

    /// Series-producing indicators in display order.
    pub fn indicators(&self) -> Vec<IndicatorKind> {
        let (fast, slow, signal) = self.macd_periods;
        let mut kinds: Vec<IndicatorKind> = self
            .ema_periods
            .iter()
            .map(|&p| IndicatorKind::Ema(p))
            .chain(self.sma_periods.iter().map(|&p| IndicatorKind::Sma(p)))
            .collect();
        kinds.push(IndicatorKind::Rsi(self.rsi_period));
        kinds.push(IndicatorKind::Macd { fast, slow, signal });
        kinds.push(IndicatorKind::Bollinger {
            period: self.bollinger_period,
            std_dev: self.bollinger_std_dev,
        });
        kinds.push(IndicatorKind::Atr(self.atr_period));
        kinds
    }
}

fn override_with<F, P, T>(lookup: &F, key: &str, parse: P, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, IndicatorError>,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match parse(&raw) {
        Ok(value) => *target = value,
        Err(e) => warn!(key = key, value = %raw, error = %e, "ignoring invalid config value"),
    }
}

fn parse_period_list(value: &str) -> Result<Vec<u32>, IndicatorError> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_u32)
        .collect()
}

fn parse_macd_periods(value: &str) -> Result<(u32, u32, u32), IndicatorError> {
    match parse_period_list(value)?.as_slice() {
        &[fast, slow, signal] => Ok((fast, slow, signal)),
        _ => Err(IndicatorError::InvalidNumericFormat(value.to_string())),
    }
}
