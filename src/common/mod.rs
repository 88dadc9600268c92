//! Numeric helpers shared by the indicator engines.

pub mod math;
