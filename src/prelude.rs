//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use strict_scalar::prelude::*;
//!
//! assert_eq!(usize::times_and_a_half_even(4), 6);
//! ```

pub use crate::domain::RoundingMode;
pub use crate::error::{Error, FloatError, IntegerError, Result};
pub use crate::math::{ConsistentArithmetic, UMax, UnsignedArithmetic};
pub use crate::required::{required, required_true};

#[cfg(feature = "float")]
pub use crate::math::float;
#[cfg(feature = "float")]
pub use crate::math::{to_integer, to_umax, to_usize, RoundingGuard};
