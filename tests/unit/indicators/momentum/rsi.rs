//! Unit tests for RSI indicator

use candlescope::indicators::momentum::{calculate_rsi, calculate_rsi_default};
use candlescope::models::indicators::Candle;
use chrono::{Duration, Utc};

fn create_test_candles(closes: &[f64]) -> Vec<Candle> {
    let start = Utc::now();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, start + Duration::minutes(i as i64))
        })
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let candles = create_test_candles(&[1.0; 14]);
    assert!(calculate_rsi(&candles, 14).is_empty());

    let candles = create_test_candles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(calculate_rsi(&candles, 10).is_empty());
}

#[test]
fn test_rsi_minimum_length() {
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi(&create_test_candles(&closes), 14);
    assert_eq!(rsi.len(), 15);
    assert!(rsi[..14].iter().all(Option::is_none));
    assert_eq!(rsi[14], Some(100.0));
}

#[test]
fn test_rsi_uptrend_saturates_at_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi_default(&create_test_candles(&closes));

    assert_eq!(rsi.len(), 30);
    assert!(rsi[..14].iter().all(Option::is_none));
    for value in &rsi[14..] {
        let value = value.unwrap();
        assert!(!value.is_nan());
        assert_eq!(value, 100.0);
    }
}

#[test]
fn test_rsi_downtrend_is_zero() {
    let closes: Vec<f64> = (0..20).map(|i| 200.0 - i as f64).collect();
    let rsi = calculate_rsi(&create_test_candles(&closes), 14);
    assert!(rsi[14..].iter().all(|v| *v == Some(0.0)));
}

#[test]
fn test_rsi_flat_prices_do_not_produce_nan() {
    let rsi = calculate_rsi(&create_test_candles(&[50.0; 20]), 14);
    assert!(rsi[14..].iter().all(|v| *v == Some(100.0)));
}

#[test]
fn test_rsi_wilder_smoothing() {
    // deltas: +1, -1, +2
    let rsi = calculate_rsi(&create_test_candles(&[10.0, 11.0, 10.0, 12.0]), 2);
    assert_eq!(rsi[..2], [None, None]);
    assert!((rsi[2].unwrap() - 50.0).abs() < 1e-9);
    // avg gain (0.5 + 2) / 2 = 1.25, avg loss 0.5 / 2 = 0.25, RS = 5
    assert!((rsi[3].unwrap() - (100.0 - 100.0 / 6.0)).abs() < 1e-9);
}

#[test]
fn test_rsi_bounded() {
    let closes: Vec<f64> = (0..100)
        .map(|i| 100.0 + ((i * 37) % 17) as f64 - 8.0)
        .collect();
    let rsi = calculate_rsi(&create_test_candles(&closes), 14);
    for value in rsi.iter().flatten() {
        assert!((0.0..=100.0).contains(value));
    }
}
