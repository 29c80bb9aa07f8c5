//! One generic surface over every numeric family.
//!
//! The [`ConsistentArithmetic`] trait lets algorithms be written once and
//! run over `f32`, `usize` or `u128` with each family's own checks and
//! error taxonomy.
//!
//! | Type | Error | Comparison |
//! |------|-------|------------|
//! | `f32` | [`FloatError`] | epsilon-tolerant |
//! | `usize` | [`IntegerError`] | exact |
//! | `u128` | [`IntegerError`] | exact |
//!
//! # Examples
//!
//! ```
//! use strict_scalar::math::consistent_sum;
//!
//! assert_eq!(consistent_sum(&[1usize, 2, 3]), Ok(6));
//! assert_eq!(consistent_sum(&[0.5f32, 0.25]), Ok(0.75));
//! assert!(consistent_sum(&[u128::MAX, 1]).is_err());
//! ```

use core::cmp::Ordering;

#[cfg(feature = "float")]
use crate::error::FloatError;
use crate::error::IntegerError;
#[cfg(feature = "float")]
use crate::math::float;
use crate::math::UnsignedArithmetic;

/// Checked arithmetic shared by the float and integer families.
///
/// # Contract
///
/// - Every arithmetic method either returns a verified result or the
///   family's documented error; it never returns a silently wrong value.
/// - `consistent_min` / `consistent_max` agree with `consistent_cmp`.
pub trait ConsistentArithmetic: Copy + core::fmt::Debug + PartialEq {
    /// Family-specific failure kind.
    type Error: core::fmt::Debug + Copy + Eq;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Three-way comparison under the family's notion of equality.
    #[must_use]
    fn consistent_cmp(self, other: Self) -> Ordering;

    /// The smaller of two values.
    #[must_use]
    fn consistent_min(self, other: Self) -> Self;

    /// The larger of two values.
    #[must_use]
    fn consistent_max(self, other: Self) -> Self;

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns the family error when the sum cannot be verified.
    fn consistent_add(self, other: Self) -> Result<Self, Self::Error>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns the family error when the difference cannot be verified.
    fn consistent_sub(self, other: Self) -> Result<Self, Self::Error>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns the family error when the product cannot be verified.
    fn consistent_mul(self, other: Self) -> Result<Self, Self::Error>;

    /// Checked division (truncating for integers).
    ///
    /// # Errors
    ///
    /// Returns the family's divide-by-zero error for a zero divisor, or an
    /// inconsistency error when the quotient cannot be verified.
    fn consistent_div(self, other: Self) -> Result<Self, Self::Error>;
}

#[cfg(feature = "float")]
impl ConsistentArithmetic for f32 {
    type Error = FloatError;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn consistent_cmp(self, other: Self) -> Ordering {
        float::compare(self, other)
    }

    #[inline]
    fn consistent_min(self, other: Self) -> Self {
        float::minimum(self, other)
    }

    #[inline]
    fn consistent_max(self, other: Self) -> Self {
        float::maximum(self, other)
    }

    #[inline]
    fn consistent_add(self, other: Self) -> Result<Self, FloatError> {
        float::add(self, other)
    }

    #[inline]
    fn consistent_sub(self, other: Self) -> Result<Self, FloatError> {
        float::subtract(self, other)
    }

    #[inline]
    fn consistent_mul(self, other: Self) -> Result<Self, FloatError> {
        float::multiply(self, other)
    }

    #[inline]
    fn consistent_div(self, other: Self) -> Result<Self, FloatError> {
        float::divide(self, other)
    }
}

macro_rules! consistent_integer_impl {
    ($t:ty) => {
        impl ConsistentArithmetic for $t {
            type Error = IntegerError;

            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn consistent_cmp(self, other: Self) -> Ordering {
                self.three_way(other)
            }

            #[inline]
            fn consistent_min(self, other: Self) -> Self {
                self.minimum(other)
            }

            #[inline]
            fn consistent_max(self, other: Self) -> Self {
                self.maximum(other)
            }

            #[inline]
            fn consistent_add(self, other: Self) -> Result<Self, IntegerError> {
                self.safe_add(other)
            }

            #[inline]
            fn consistent_sub(self, other: Self) -> Result<Self, IntegerError> {
                self.safe_sub(other)
            }

            #[inline]
            fn consistent_mul(self, other: Self) -> Result<Self, IntegerError> {
                self.safe_mul(other)
            }

            #[inline]
            fn consistent_div(self, other: Self) -> Result<Self, IntegerError> {
                self.safe_div(other, None)
            }
        }
    };
}

consistent_integer_impl!(usize);
consistent_integer_impl!(u128);

/// Sums `values`, stopping at the first failed step.  An empty slice sums
/// to zero.
///
/// # Errors
///
/// Propagates the first error reported by
/// [`consistent_add`](ConsistentArithmetic::consistent_add).
pub fn consistent_sum<T: ConsistentArithmetic>(values: &[T]) -> Result<T, T::Error> {
    values
        .iter()
        .try_fold(T::ZERO, |acc, &value| acc.consistent_add(value))
}

/// Multiplies `values`, stopping at the first failed step.  An empty slice
/// multiplies to one.
///
/// # Errors
///
/// Propagates the first error reported by
/// [`consistent_mul`](ConsistentArithmetic::consistent_mul).
pub fn consistent_product<T: ConsistentArithmetic>(values: &[T]) -> Result<T, T::Error> {
    values
        .iter()
        .try_fold(T::ONE, |acc, &value| acc.consistent_mul(value))
}
