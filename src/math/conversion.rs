//! Rounding-mode aware conversion from `f32` to unsigned integers.
//!
//! Conversion runs as a fixed sequence:
//!
//! 1. reject negative input,
//! 2. reject an undefined rounding-mode code,
//! 3. install the requested mode through a [`RoundingGuard`],
//! 4. clear the exception flags and round,
//! 5. map an invalid-operation flag to [`FloatError::ValueTooLarge`],
//! 6. restore the caller's rounding mode (guard drop, on every path).
//!
//! # Examples
//!
//! ```
//! use strict_scalar::domain::RoundingMode;
//! use strict_scalar::error::FloatError;
//! use strict_scalar::math::conversion::to_usize;
//!
//! assert_eq!(to_usize(18.7, RoundingMode::Nearest), Ok(19));
//! assert_eq!(to_usize(6.2, RoundingMode::Upward), Ok(7));
//! assert_eq!(to_usize(-0.0001, RoundingMode::Nearest), Err(FloatError::ValueIsNegative));
//! assert_eq!(to_usize(f32::MAX, RoundingMode::Nearest), Err(FloatError::ValueTooLarge));
//! ```

use crate::domain::RoundingMode;
use crate::error::FloatError;
use crate::math::fenv::{self, Exceptions, RoundingGuard};
use crate::math::float;
use crate::math::UMax;
use crate::required::required_true;

/// Unsigned integer types an `f32` can be converted to.
pub trait ConversionTarget: Copy {
    /// Width of the type in bits.
    const BITS: u32;

    /// Converts an integral, in-range, non-negative `f32`.
    ///
    /// Callers guarantee `0.0 <= value < 2^BITS` and that `value` has no
    /// fractional part.
    fn from_integral(value: f32) -> Self;
}

macro_rules! conversion_target_impl {
    ($t:ty) => {
        impl ConversionTarget for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_integral(value: f32) -> Self {
                value as $t
            }
        }
    };
}

conversion_target_impl!(usize);
conversion_target_impl!(u64);

/// Converts `value` to `T`, rounding with `mode`.
///
/// # Errors
///
/// - [`FloatError::ValueIsNegative`] if `value` is less than zero (by the
///   epsilon-tolerant [`float::is_less_than`]), or if a tiny negative
///   value rounds down to a negative integer.
/// - [`FloatError::ValueTooLarge`] if the rounded value is NaN, infinite,
///   or does not fit in `T`.
pub fn to_integer<T: ConversionTarget>(value: f32, mode: RoundingMode) -> Result<T, FloatError> {
    if float::is_less_than(value, 0.0) {
        tracing::trace!(value, "negative value cannot be converted");
        return Err(FloatError::ValueIsNegative);
    }
    convert(value, mode)
}

/// Converts `value` to `T`, rounding with the mode identified by the raw
/// `code` (see [`RoundingMode`]'s `TryFrom<u32>`).
///
/// The sign check runs before the code is validated.
///
/// # Errors
///
/// As [`to_integer`], plus [`FloatError::RoundingModeInvalid`] when
/// `code` names no mode.
pub fn to_integer_raw<T: ConversionTarget>(value: f32, code: u32) -> Result<T, FloatError> {
    if float::is_less_than(value, 0.0) {
        tracing::trace!(value, "negative value cannot be converted");
        return Err(FloatError::ValueIsNegative);
    }
    let mode = RoundingMode::try_from(code)?;
    convert(value, mode)
}

/// Converts `value` to a platform-width integer.
///
/// # Errors
///
/// See [`to_integer`].
pub fn to_usize(value: f32, mode: RoundingMode) -> Result<usize, FloatError> {
    to_integer(value, mode)
}

/// Converts `value` to the maximum-width integer.
///
/// The conversion range is that of a 64-bit unsigned integer: values at
/// or above `2^64` fail even though [`UMax`] could hold them.  The
/// rounded result is widened afterwards.
///
/// # Errors
///
/// See [`to_integer`]; `f32::MAX` is [`FloatError::ValueTooLarge`].
pub fn to_umax(value: f32, mode: RoundingMode) -> Result<UMax, FloatError> {
    to_integer::<u64>(value, mode).map(UMax::from)
}

fn convert<T: ConversionTarget>(value: f32, mode: RoundingMode) -> Result<T, FloatError> {
    let _guard = RoundingGuard::install(mode);
    fenv::clear_exceptions();

    let rounded = fenv::round_to_integral(value);
    let limit = 2.0_f32.powi(T::BITS as i32);
    if !(rounded >= 0.0 && rounded < limit) {
        fenv::raise(Exceptions::INVALID);
    }

    let raised = fenv::exceptions() & !Exceptions::INEXACT;
    if raised.contains(Exceptions::INVALID) {
        if rounded < 0.0 {
            tracing::trace!(value, ?mode, rounded, "value rounds to a negative integer");
            return Err(FloatError::ValueIsNegative);
        }
        tracing::trace!(value, ?mode, bits = T::BITS, "value too large for target");
        return Err(FloatError::ValueTooLarge);
    }
    required_true(raised.is_empty());
    Ok(T::from_integral(rounded))
}
