//! Overflow-checked arithmetic for unsigned integers.
//!
//! The [`UnsignedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Self, IntegerError>`](crate::error::IntegerError)
//! instead of wrapping silently.  Every check is a post-condition: the
//! naive (wrapping) result is computed first and then verified.
//!
//! # Implementations
//!
//! - `usize`: the platform-width family.
//! - `u128`: the maximum-width family, also exported as [`UMax`].
//!
//! # Examples
//!
//! ```
//! use strict_scalar::math::UnsignedArithmetic;
//!
//! assert_eq!(usize::safe_add(2, 3), Ok(5));
//! assert!(u128::MAX.safe_mul(2).is_err());
//! assert_eq!(usize::times_and_a_half_even(10), 16);
//! ```

use core::cmp::Ordering;

use crate::error::IntegerError;
use crate::required::required_true;

/// The maximum-width unsigned integer.
pub type UMax = u128;

/// Capacity handed out when growing from zero.
const BOOTSTRAP_CAPACITY: u8 = 2;

/// Checked arithmetic and comparison for an unsigned integer domain.
///
/// # Contract
///
/// - **No wrapping**: an overflowing result is reported as
///   [`IntegerError::ResultInconsistent`].
/// - **No panics**: except [`compare_ref`](Self::compare_ref) with two
///   absent references, which is a precondition violation.
/// - Inconsistency is detected strictly after computing the naive result.
pub trait UnsignedArithmetic: Copy + Ord + Sized {
    /// Three-way comparison by value.
    #[must_use]
    fn three_way(self, other: Self) -> Ordering;

    /// Compares two optional references by pointee value; an absent
    /// reference orders before any present one.
    ///
    /// # Panics
    ///
    /// Panics when both references are absent.
    #[must_use]
    fn compare_ref(a: Option<&Self>, b: Option<&Self>) -> Ordering;

    /// Returns the smaller value.
    #[must_use]
    fn minimum(self, other: Self) -> Self;

    /// Returns the larger value.
    #[must_use]
    fn maximum(self, other: Self) -> Self;

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`IntegerError::ResultInconsistent`] if the sum wrapped.
    fn safe_add(self, other: Self) -> Result<Self, IntegerError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`IntegerError::ResultInconsistent`] if `other > self`.
    fn safe_sub(self, other: Self) -> Result<Self, IntegerError>;

    /// Checked multiplication.  A zero operand short-circuits to zero.
    ///
    /// # Errors
    ///
    /// Returns [`IntegerError::ResultInconsistent`] if the product wrapped.
    fn safe_mul(self, other: Self) -> Result<Self, IntegerError>;

    /// Truncating division.  When `remainder` is present it receives
    /// `self % divisor`; an absent remainder is simply skipped.
    ///
    /// # Errors
    ///
    /// Returns [`IntegerError::DivideByZero`] if `divisor` is zero; the
    /// remainder is left untouched in that case.
    fn safe_div(self, divisor: Self, remainder: Option<&mut Self>) -> Result<Self, IntegerError>;

    /// Growth size for capacity-doubling containers: roughly one and a
    /// half times `current`, rounded up to an even number.
    ///
    /// `0` grows to `2`; a result past the domain maximum saturates to
    /// the maximum.
    #[must_use]
    fn times_and_a_half_even(current: Self) -> Self;
}

macro_rules! unsigned_arithmetic_impl {
    ($t:ty) => {
        impl UnsignedArithmetic for $t {
            #[inline]
            fn three_way(self, other: Self) -> Ordering {
                if self == other {
                    Ordering::Equal
                } else if self > other {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }

            #[track_caller]
            fn compare_ref(a: Option<&Self>, b: Option<&Self>) -> Ordering {
                required_true(a.is_some() || b.is_some());
                match (a, b) {
                    (Some(a), Some(b)) => a.three_way(*b),
                    (None, _) => Ordering::Less,
                    (_, None) => Ordering::Greater,
                }
            }

            #[inline]
            fn minimum(self, other: Self) -> Self {
                if self < other { self } else { other }
            }

            #[inline]
            fn maximum(self, other: Self) -> Self {
                if self > other { self } else { other }
            }

            fn safe_add(self, other: Self) -> Result<Self, IntegerError> {
                let sum = self.wrapping_add(other);
                if sum < self {
                    tracing::trace!(a = %self, b = %other, "{} addition overflow", stringify!($t));
                    return Err(IntegerError::ResultInconsistent);
                }
                Ok(sum)
            }

            fn safe_sub(self, other: Self) -> Result<Self, IntegerError> {
                if self < other {
                    tracing::trace!(a = %self, b = %other, "{} subtraction underflow", stringify!($t));
                    return Err(IntegerError::ResultInconsistent);
                }
                Ok(self - other)
            }

            fn safe_mul(self, other: Self) -> Result<Self, IntegerError> {
                if self == 0 || other == 0 {
                    return Ok(0);
                }
                let product = self.wrapping_mul(other);
                if product / self != other {
                    tracing::trace!(a = %self, b = %other, "{} multiplication overflow", stringify!($t));
                    return Err(IntegerError::ResultInconsistent);
                }
                Ok(product)
            }

            fn safe_div(
                self,
                divisor: Self,
                remainder: Option<&mut Self>,
            ) -> Result<Self, IntegerError> {
                if divisor == 0 {
                    tracing::trace!(a = %self, "{} division by zero", stringify!($t));
                    return Err(IntegerError::DivideByZero);
                }
                if let Some(slot) = remainder {
                    *slot = self % divisor;
                }
                Ok(self / divisor)
            }

            fn times_and_a_half_even(current: Self) -> Self {
                if current == 0 {
                    return Self::from(BOOTSTRAP_CAPACITY);
                }
                let mut half = current >> 1;
                // Align parities so that current + half is even.
                if (current & 1) ^ (half & 1) != 0 {
                    half += 1;
                }
                match current.safe_add(half) {
                    Ok(grown) => grown,
                    Err(err) => {
                        required_true(err == IntegerError::ResultInconsistent);
                        Self::MAX
                    }
                }
            }
        }
    };
}

unsigned_arithmetic_impl!(usize);
unsigned_arithmetic_impl!(u128);
