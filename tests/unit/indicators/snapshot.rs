//! Unit tests for indicator snapshots

use candlescope::config::IndicatorConfig;
use candlescope::models::indicators::{Candle, IndicatorSet};
use chrono::{Duration, Utc};

fn create_test_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now();
    (0..count)
        .map(|i| {
            let price = 100.0 + i as f64;
            Candle::new(price, price + 0.5, price - 0.5, price, 10.0, start + Duration::minutes(i as i64))
        })
        .collect()
}

#[test]
fn test_snapshot_latest_values() {
    let candles = create_test_candles(60);
    let set = IndicatorSet::from_candles("BTCUSDT", &candles, &IndicatorConfig::default());

    assert_eq!(set.symbol, "BTCUSDT");
    assert_eq!(set.price, Some(159.0));
    assert_eq!(set.candle_count, 60);
    assert_eq!(set.emas.len(), 2);
    assert_eq!(set.emas[0].period, 9);
    assert!((set.emas[0].value.unwrap() - 155.0).abs() < 1e-9);
    assert_eq!(set.rsi.as_ref().unwrap().value, Some(100.0));
    assert!(set.macd.as_ref().unwrap().histogram.is_some());
    assert_eq!(set.atr.as_ref().unwrap().value, Some(1.5));
    assert!(set.levels.support.len() <= 3);
}

#[test]
fn test_snapshot_short_history() {
    let candles = create_test_candles(5);
    let set = IndicatorSet::from_candles("ETHUSDT", &candles, &IndicatorConfig::default());

    assert!(set.emas.iter().all(|ema| ema.value.is_none()));
    assert!(set.smas.iter().all(|sma| sma.value.is_none()));
    assert_eq!(set.rsi.as_ref().unwrap().value, None);
    assert_eq!(set.macd.as_ref().unwrap().macd, None);
    assert_eq!(set.bollinger.as_ref().unwrap().middle, None);
    assert!(set.levels.support.is_empty());
}

#[test]
fn test_snapshot_empty_history() {
    let set = IndicatorSet::from_candles("BTCUSDT", &[], &IndicatorConfig::default());
    assert_eq!(set.price, None);
    assert_eq!(set.candle_count, 0);
}

#[test]
fn test_snapshot_serializes() {
    let candles = create_test_candles(30);
    let set = IndicatorSet::from_candles("BTCUSDT", &candles, &IndicatorConfig::default());
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value["symbol"], "BTCUSDT");
    assert_eq!(value["rsi"]["value"], 100.0);
    assert_eq!(value["rsi"]["period"], 14);
}
