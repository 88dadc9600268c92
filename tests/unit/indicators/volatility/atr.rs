//! Unit tests for ATR indicator

use candlescope::indicators::volatility::{calculate_atr, calculate_atr_default};
use candlescope::models::indicators::Candle;
use chrono::{Duration, Utc};

fn candle_at(i: i64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(close, high, low, close, 1000.0, Utc::now() + Duration::minutes(i))
}

fn flat_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| candle_at(i as i64, 101.0, 99.0, 100.0))
        .collect()
}

#[test]
fn test_atr_insufficient_data() {
    assert!(calculate_atr_default(&flat_candles(14)).is_empty());
    assert!(calculate_atr(&flat_candles(5), 10).is_empty());
}

#[test]
fn test_atr_minimum_length() {
    let atr = calculate_atr_default(&flat_candles(15));
    assert_eq!(atr.len(), 15);
    assert!(atr[..14].iter().all(Option::is_none));
    assert_eq!(atr[14], Some(2.0));
}

#[test]
fn test_atr_constant_range() {
    let atr = calculate_atr_default(&flat_candles(40));
    assert!(atr[14..].iter().all(|v| *v == Some(2.0)));
}

#[test]
fn test_atr_wilder_smoothing_with_gaps() {
    let candles = vec![
        candle_at(0, 10.0, 8.0, 9.0),
        candle_at(1, 11.0, 9.0, 10.0),  // TR 2
        candle_at(2, 14.0, 12.0, 13.0), // TR 4, gap above previous close
        candle_at(3, 13.0, 12.0, 12.5), // TR 1
    ];
    let atr = calculate_atr(&candles, 2);
    assert_eq!(atr, vec![None, None, Some(3.0), Some(2.0)]);
}
