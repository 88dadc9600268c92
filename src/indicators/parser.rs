//! Normalization of raw kline payloads into [`Candle`]s.
//!
//! Two feeds are accepted: REST kline rows
//! (`[openTime, "open", "high", "low", "close", "volume", closeTime, ...]`)
//! and stream messages of the form
//! `{"type": "kline_update", "symbol": ..., "kline": {"t", "T", "o", "h", "l", "c", "v"}}`.
//! Prices may arrive as strings or JSON numbers.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_candle, validate_candles};
use crate::models::indicators::Candle;

const KLINE_UPDATE: &str = "kline_update";

pub fn parse_f64(value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_u32(value: &str) -> Result<u32, IndicatorError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

/// Millisecond epoch timestamp to UTC.
pub fn timestamp_from_millis(millis: i64) -> Result<DateTime<Utc>, IndicatorError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| IndicatorError::InvalidNumericFormat(millis.to_string()))
}

/// Parse one REST kline row. The candle timestamp is the open time.
pub fn parse_kline_row(row: &Value) -> Result<Candle, IndicatorError> {
    let fields = row
        .as_array()
        .ok_or_else(|| IndicatorError::MalformedMessage("kline row is not an array".to_string()))?;

    let open_time = match fields.first() {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| IndicatorError::InvalidNumericFormat(n.to_string()))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| IndicatorError::InvalidNumericFormat(s.clone()))?,
        Some(other) => return Err(IndicatorError::InvalidNumericFormat(other.to_string())),
        None => return Err(IndicatorError::MissingField("open_time".to_string())),
    };

    Ok(Candle::new(
        row_f64(fields, 1, "open")?,
        row_f64(fields, 2, "high")?,
        row_f64(fields, 3, "low")?,
        row_f64(fields, 4, "close")?,
        row_f64(fields, 5, "volume")?,
        timestamp_from_millis(open_time)?,
    ))
}

/// Parse a JSON array of REST kline rows into validated, ordered candles.
pub fn parse_klines(json: &str) -> Result<Vec<Candle>, IndicatorError> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let candles = rows
        .iter()
        .map(parse_kline_row)
        .collect::<Result<Vec<_>, _>>()?;

    validate_candles(&candles)?;
    debug!(count = candles.len(), "parsed kline rows");
    Ok(candles)
}

/// A normalized stream update for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct KlineUpdate {
    pub symbol: String,
    pub candle: Candle,
    pub close_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct KlineMessage {
    #[serde(rename = "type")]
    message_type: String,
    symbol: Option<String>,
    kline: Option<KlinePayload>,
}

#[derive(Debug, Deserialize)]
struct KlinePayload {
    #[serde(rename = "t")]
    open_time: i64,
    #[serde(rename = "T")]
    close_time: Option<i64>,
    #[serde(rename = "o")]
    open: NumericField,
    #[serde(rename = "h")]
    high: NumericField,
    #[serde(rename = "l")]
    low: NumericField,
    #[serde(rename = "c")]
    close: NumericField,
    #[serde(rename = "v")]
    volume: NumericField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    fn to_f64(&self) -> Result<f64, IndicatorError> {
        match self {
            NumericField::Number(n) => Ok(*n),
            NumericField::Text(s) => parse_f64(s),
        }
    }
}

/// Parse a `kline_update` stream message.
pub fn parse_kline_update(text: &str) -> Result<KlineUpdate, IndicatorError> {
    let message: KlineMessage = serde_json::from_str(text)?;
    if message.message_type != KLINE_UPDATE {
        return Err(IndicatorError::MalformedMessage(format!(
            "unexpected message type {}",
            message.message_type
        )));
    }

    let symbol = message
        .symbol
        .ok_or_else(|| IndicatorError::MissingField("symbol".to_string()))?;
    let kline = message
        .kline
        .ok_or_else(|| IndicatorError::MissingField("kline".to_string()))?;

    let candle = Candle::new(
        kline.open.to_f64()?,
        kline.high.to_f64()?,
        kline.low.to_f64()?,
        kline.close.to_f64()?,
        kline.volume.to_f64()?,
        timestamp_from_millis(kline.open_time)?,
    );
    validate_candle(&candle, 0)?;

    let close_time = kline.close_time.map(timestamp_from_millis).transpose()?;

    Ok(KlineUpdate {
        symbol,
        candle,
        close_time,
    })
}

fn row_f64(fields: &[Value], index: usize, name: &str) -> Result<f64, IndicatorError> {
    match fields.get(index) {
        Some(Value::String(s)) => parse_f64(s),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| IndicatorError::InvalidNumericFormat(name.to_string())),
        Some(other) => Err(IndicatorError::InvalidNumericFormat(format!(
            "{}: {}",
            name, other
        ))),
        None => Err(IndicatorError::MissingField(name.to_string())),
    }
}
