//! Nutrition calculation helpers
//!
//! Unit handling used when ingredients are given in something other than grams.

pub mod units;

pub use units::{grams_per_unit, to_grams};
