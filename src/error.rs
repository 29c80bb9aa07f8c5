//! Unified error types for the strict scalar library.
//!
//! Each numeric family reports its own closed taxonomy:
//!
//! - [`IntegerError`] for the `usize` / `u128` family.
//! - [`FloatError`] for the `f32` family and float-to-integer conversion.
//!
//! [`Error`] wraps both so that code mixing families can use a single
//! `?`-compatible error type.
//!
//! Contract violations established by the library itself are *not*
//! represented here; they abort through [`required_true`](crate::required::required_true).

use thiserror::Error;

/// Failure reported by the unsigned integer family.
///
/// # Examples
///
/// ```
/// use strict_scalar::error::IntegerError;
/// use strict_scalar::math::UnsignedArithmetic;
///
/// assert_eq!(usize::MAX.safe_add(1), Err(IntegerError::ResultInconsistent));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerError {
    /// The post-hoc consistency check failed: the operation overflowed or
    /// underflowed the domain.
    #[error("integer result is inconsistent (overflow or underflow)")]
    ResultInconsistent,

    /// The divisor was zero.
    #[error("integer division by zero")]
    DivideByZero,
}

/// Failure reported by the `f32` family and float-to-integer conversion.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatError {
    /// Re-deriving an operand from the result did not reproduce the
    /// original operand: overflow or precision loss.
    #[error("float result is inconsistent (overflow or precision loss)")]
    ResultInconsistent,

    /// One operand had no effect on the result (swamp-out).
    #[error("float result is unchanged by a non-zero operand")]
    ResultUnchanged,

    /// The divisor was within epsilon of zero.
    #[error("float division by zero")]
    DivideByZero,

    /// A negative value cannot be converted to an unsigned integer.
    #[error("float value is negative")]
    ValueIsNegative,

    /// The raw rounding-mode code is not one of the defined modes.
    #[error("rounding mode {0} is invalid")]
    RoundingModeInvalid(u32),

    /// The rounded value does not fit in the target integer type.
    #[error("float value is too large for the target integer")]
    ValueTooLarge,
}

/// Error type spanning every numeric family.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// An integer family failure.
    #[error(transparent)]
    Integer(#[from] IntegerError),

    /// A float family failure.
    #[error(transparent)]
    Float(#[from] FloatError),
}

/// Convenience alias, defaulting to the umbrella [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
