//! Value types shared across the numeric families.

mod rounding;

pub use rounding::RoundingMode;
