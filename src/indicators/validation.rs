use crate::indicators::error::IndicatorError;
use crate::models::indicators::Candle;

/// Check that a single candle is internally consistent.
///
/// `index` is only used to label the error.
pub fn validate_candle(candle: &Candle, index: usize) -> Result<(), IndicatorError> {
    let invalid = |reason: &str| IndicatorError::InvalidCandle {
        index,
        reason: reason.to_string(),
    };

    let fields = [
        ("open", candle.open),
        ("high", candle.high),
        ("low", candle.low),
        ("close", candle.close),
        ("volume", candle.volume),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(invalid(&format!("{} is not finite", name)));
        }
    }

    if candle.high < candle.low {
        return Err(invalid("high is below low"));
    }
    if candle.high < candle.open.max(candle.close) {
        return Err(invalid("high is below open or close"));
    }
    if candle.low > candle.open.min(candle.close) {
        return Err(invalid("low is above open or close"));
    }
    if candle.volume < 0.0 {
        return Err(invalid("volume is negative"));
    }

    Ok(())
}

/// Validate every candle and require strictly increasing timestamps.
pub fn validate_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        validate_candle(candle, index)?;
        if index > 0 && candle.timestamp <= candles[index - 1].timestamp {
            return Err(IndicatorError::OutOfOrder { index });
        }
    }
    Ok(())
}
