//! Errors raised at the candle ingestion boundary.
//!
//! Indicator calculations themselves never fail; short input produces empty
//! or `None`-padded series instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid candle at index {index}: {reason}")]
    InvalidCandle { index: usize, reason: String },

    #[error("candle at index {index} is not newer than the previous candle")]
    OutOfOrder { index: usize },

    #[error("malformed message: {0}")]
    MalformedMessage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
