//! Positional zip of indicator series back onto candles for charting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::indicators::registry::IndicatorKind;
use crate::models::indicators::Candle;

/// A candle with the indicator values that line up with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub values: BTreeMap<String, Option<f64>>,
}

pub struct ChartOverlay<'a> {
    candles: &'a [Candle],
    series: Vec<(String, Vec<Option<f64>>)>,
}

impl<'a> ChartOverlay<'a> {
    pub fn new(candles: &'a [Candle]) -> Self {
        Self {
            candles,
            series: Vec::new(),
        }
    }

    /// Attach a named series. An empty series (not enough candles) leaves the
    /// name present with `None` at every point.
    pub fn with_series(mut self, name: impl Into<String>, series: Vec<Option<f64>>) -> Self {
        self.series.push((name.into(), series));
        self
    }

    /// Compute an indicator over the overlay's candles and attach its series.
    pub fn with_indicator(mut self, kind: IndicatorKind) -> Self {
        self.series.extend(kind.compute(self.candles));
        self
    }

    pub fn points(&self) -> Vec<ChartPoint> {
        self.candles
            .iter()
            .enumerate()
            .map(|(i, candle)| ChartPoint {
                timestamp: candle.timestamp,
                open: candle.open,
                high: candle.high,
                low: candle.low,
                close: candle.close,
                volume: candle.volume,
                values: self
                    .series
                    .iter()
                    .map(|(name, series)| (name.clone(), series.get(i).copied().flatten()))
                    .collect(),
            })
            .collect()
    }
}
