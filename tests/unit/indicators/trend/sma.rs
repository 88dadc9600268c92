//! Unit tests for SMA indicator

use candlescope::indicators::trend::calculate_sma;
use candlescope::models::indicators::Candle;
use chrono::{Duration, Utc};

fn create_test_candles(closes: &[f64]) -> Vec<Candle> {
    let start = Utc::now();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(close, close + 1.0, close - 1.0, close, 10.0, start + Duration::minutes(i as i64))
        })
        .collect()
}

#[test]
fn test_sma_insufficient_data() {
    let candles = create_test_candles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(calculate_sma(&candles, 10).is_empty());
}

#[test]
fn test_sma_trailing_window() {
    let candles = create_test_candles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let sma = calculate_sma(&candles, 3);
    assert_eq!(sma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_sma_is_idempotent() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 11) as f64).collect();
    let candles = create_test_candles(&closes);
    let copy = candles.clone();
    assert_eq!(calculate_sma(&candles, 20), calculate_sma(&copy, 20));
}
