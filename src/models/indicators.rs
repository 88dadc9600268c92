use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One value per input candle; `None` where there was not enough history.
pub type Series = Vec<Option<f64>>;

/// A single OHLCV bar. `timestamp` is the bar's open time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Close prices of a candle slice, in order.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

impl MacdSeries {
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

impl BollingerSeries {
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// A detected local extremum, anchored to the candle at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    pub support: Vec<Level>,
    pub resistance: Vec<Level>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: Option<f64>,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: Option<f64>,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: Option<f64>,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
    pub period: (u32, u32, u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: Option<f64>,
    pub middle: Option<f64>,
    pub lower: Option<f64>,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: Option<f64>,
    pub period: u32,
}

/// Latest value of every configured indicator for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub candle_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emas: Vec<EmaIndicator>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub smas: Vec<SmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<AtrIndicator>,
    #[serde(default)]
    pub levels: SupportResistanceLevels,
}

impl IndicatorSet {
    pub fn new(symbol: String) -> Self {
        Self {
            symbol,
            price: None,
            timestamp: None,
            candle_count: 0,
            emas: Vec::new(),
            smas: Vec::new(),
            rsi: None,
            macd: None,
            bollinger: None,
            atr: None,
            levels: SupportResistanceLevels::default(),
        }
    }

    pub fn with_last_candle(mut self, candle: &Candle) -> Self {
        self.price = Some(candle.close);
        self.timestamp = Some(candle.timestamp);
        self
    }

    pub fn with_rsi(mut self, rsi: RsiIndicator) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_bollinger(mut self, bollinger: BollingerBandsIndicator) -> Self {
        self.bollinger = Some(bollinger);
        self
    }

    pub fn with_atr(mut self, atr: AtrIndicator) -> Self {
        self.atr = Some(atr);
        self
    }

    pub fn with_levels(mut self, levels: SupportResistanceLevels) -> Self {
        self.levels = levels;
        self
    }
}
