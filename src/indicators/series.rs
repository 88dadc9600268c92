//! Helpers over indicator result series.

/// Latest present value of a series, scanning from the end.
///
/// Returns `None` for an empty series or one with no values yet.
pub fn get_current_value(series: &[Option<f64>]) -> Option<f64> {
    series.iter().rev().find_map(|value| *value)
}
