//! Unit tests for configuration

use candlescope::config::IndicatorConfig;
use candlescope::indicators::registry::IndicatorKind;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let config = IndicatorConfig::default();
    assert_eq!(config.ema_periods, vec![9, 21]);
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.macd_periods, (12, 26, 9));
    assert_eq!(config.bollinger_period, 20);
    assert_eq!(config.bollinger_std_dev, 2.0);
    assert_eq!(config.atr_period, 14);
    assert_eq!(config.sr_lookback, 20);
}

#[test]
fn test_config_overrides() {
    let config = IndicatorConfig::from_lookup(lookup_from(&[
        ("EMA_PERIODS", "5,10,50"),
        ("RSI_PERIOD", "7"),
        ("MACD_PERIODS", "8,17,9"),
        ("BOLLINGER_STD_DEV", "2.5"),
        ("SR_LOOKBACK", "10"),
    ]));
    assert_eq!(config.ema_periods, vec![5, 10, 50]);
    assert_eq!(config.rsi_period, 7);
    assert_eq!(config.macd_periods, (8, 17, 9));
    assert_eq!(config.bollinger_std_dev, 2.5);
    assert_eq!(config.sr_lookback, 10);
    assert_eq!(config.atr_period, 14);
}

#[test]
fn test_config_invalid_values_fall_back() {
    let config = IndicatorConfig::from_lookup(lookup_from(&[
        ("RSI_PERIOD", "fourteen"),
        ("MACD_PERIODS", "12,26"),
        ("EMA_PERIODS", "9,x"),
    ]));
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.macd_periods, (12, 26, 9));
    assert_eq!(config.ema_periods, vec![9, 21]);
}

#[test]
fn test_config_indicator_order() {
    let kinds = IndicatorConfig::default().indicators();
    assert_eq!(kinds.first(), Some(&IndicatorKind::Ema(9)));
    assert_eq!(kinds.last(), Some(&IndicatorKind::Atr(14)));
    assert_eq!(kinds.len(), 7);
}
