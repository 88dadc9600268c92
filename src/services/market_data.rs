//! Market data provider interface and the live candle buffer.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::indicators::error::IndicatorError;
use crate::indicators::parser::parse_klines;
use crate::models::indicators::Candle;

pub trait MarketDataProvider {
    /// Get up to `limit` most recent candles for a symbol, oldest first
    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, IndicatorError>;
}

/// Reads REST-style kline rows from a JSON file.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, IndicatorError> {
        let json = fs::read_to_string(&self.path)?;
        let mut candles = parse_klines(&json)?;
        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }
        info!(
            symbol = symbol,
            path = %self.path.display(),
            count = candles.len(),
            "loaded candles"
        );
        Ok(candles)
    }
}

/// What [`CandleSeries::apply_update`] did with an incoming candle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Same open time as the last candle; the in-progress bar was replaced
    Replaced,
    /// Newer than the last candle; appended
    Appended,
    /// Older than the last candle; dropped
    Stale,
}

/// Ordered candle history for one symbol/interval with a size cap.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    pub symbol: String,
    pub interval: String,
    capacity: usize,
    candles: VecDeque<Candle>,
}

impl CandleSeries {
    pub fn new(symbol: impl Into<String>, interval: impl Into<String>, capacity: usize) -> Self {
        Self {
            symbol: symbol.into(),
            interval: interval.into(),
            capacity: capacity.max(1),
            candles: VecDeque::new(),
        }
    }

    /// Seed from historical candles (assumed ordered), keeping the newest
    /// `capacity` of them.
    pub fn with_history(mut self, history: Vec<Candle>) -> Self {
        self.candles = history.into();
        self.trim();
        self
    }

    /// Merge a streamed candle into the history.
    pub fn apply_update(&mut self, candle: Candle) -> UpdateOutcome {
        let outcome = match self.candles.back_mut() {
            Some(last) if last.timestamp == candle.timestamp => {
                *last = candle;
                UpdateOutcome::Replaced
            }
            Some(last) if last.timestamp > candle.timestamp => UpdateOutcome::Stale,
            _ => {
                self.candles.push_back(candle);
                self.trim();
                UpdateOutcome::Appended
            }
        };

        debug!(
            symbol = %self.symbol,
            interval = %self.interval,
            outcome = ?outcome,
            total = self.candles.len(),
            "applied candle update"
        );
        outcome
    }

    /// Contiguous copy of the history, oldest first, ready for indicators.
    pub fn candles(&self) -> Vec<Candle> {
        self.candles.iter().copied().collect()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.back()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    fn trim(&mut self) {
        while self.candles.len() > self.capacity {
            self.candles.pop_front();
        }
    }
}
