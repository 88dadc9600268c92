//! Indicator report
//!
//! Loads kline history (`CANDLES_FILE`, or stdin when unset), merges stream
//! updates from `UPDATES_FILE` (one `kline_update` message per line) and
//! prints either the latest indicator snapshot or the full chart overlay as
//! JSON on stdout (`REPORT_MODE=snapshot|overlay`).

use candlescope::config::{get_environment, IndicatorConfig};
use candlescope::indicators::overlay::ChartOverlay;
use candlescope::indicators::parser::{parse_kline_update, parse_klines};
use candlescope::logging;
use candlescope::models::IndicatorSet;
use candlescope::services::{CandleSeries, JsonFileProvider, MarketDataProvider, UpdateOutcome};
use dotenvy::dotenv;
use std::env;
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let symbol = env::var("SYMBOL").unwrap_or_else(|_| "BTCUSDT".to_string());
    let interval = env::var("INTERVAL").unwrap_or_else(|_| "1m".to_string());
    let limit: usize = env::var("CANDLE_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000);
    let mode = env::var("REPORT_MODE").unwrap_or_else(|_| "snapshot".to_string());
    let config = IndicatorConfig::from_env();

    info!(environment = %get_environment(), symbol = %symbol, interval = %interval, "Starting indicator report");

    let history = match env::var("CANDLES_FILE") {
        Ok(path) => JsonFileProvider::new(path).get_candles(&symbol, limit)?,
        Err(_) => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            parse_klines(&input)?
        }
    };

    let mut series = CandleSeries::new(&symbol, &interval, limit).with_history(history);

    if let Ok(path) = env::var("UPDATES_FILE") {
        for (line_no, line) in fs::read_to_string(&path)?.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_kline_update(line) {
                Ok(update) if update.symbol.eq_ignore_ascii_case(&symbol) => {
                    if series.apply_update(update.candle) == UpdateOutcome::Stale {
                        warn!(line = line_no + 1, "dropping stale candle update");
                    }
                }
                Ok(update) => {
                    debug!(line = line_no + 1, symbol = %update.symbol, "skipping update for other symbol");
                }
                Err(e) => {
                    warn!(line = line_no + 1, error = %e, "skipping malformed update");
                }
            }
        }
    }

    let candles = series.candles();
    info!(candles = candles.len(), mode = %mode, "computing indicators");

    let output = match mode.as_str() {
        "overlay" => {
            let overlay = config
                .indicators()
                .into_iter()
                .fold(ChartOverlay::new(&candles), |overlay, kind| {
                    overlay.with_indicator(kind)
                });
            serde_json::to_string_pretty(&overlay.points())?
        }
        "snapshot" => {
            serde_json::to_string_pretty(&IndicatorSet::from_candles(&symbol, &candles, &config))?
        }
        other => {
            warn!(mode = %other, "unknown REPORT_MODE, falling back to snapshot");
            serde_json::to_string_pretty(&IndicatorSet::from_candles(&symbol, &candles, &config))?
        }
    };

    println!("{}", output);
    Ok(())
}
