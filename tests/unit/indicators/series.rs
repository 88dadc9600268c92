//! Unit tests for series helpers

use candlescope::indicators::get_current_value;

#[test]
fn test_current_value_empty() {
    assert_eq!(get_current_value(&[]), None);
}

#[test]
fn test_current_value_all_none() {
    assert_eq!(get_current_value(&[None, None, None]), None);
}

#[test]
fn test_current_value_skips_trailing_none() {
    assert_eq!(get_current_value(&[None, Some(1.0), Some(2.5), None]), Some(2.5));
    assert_eq!(get_current_value(&[Some(7.0)]), Some(7.0));
}
