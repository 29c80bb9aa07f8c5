//! Tolerance-based comparison and consistency-checked arithmetic for `f32`.
//!
//! IEEE 754 hardware never reports overflow or precision loss as an
//! error, so every operation here computes natively and then verifies
//! the result algebraically: one operand is re-derived from the result
//! and compared against the original with [`is_equal`].
//!
//! # Tolerance
//!
//! | Predicate | Holds when |
//! |-----------|------------|
//! | [`is_equal`] | `|a - b| <= EPSILON` |
//! | [`is_greater_than`] | `a - b >= EPSILON` |
//! | [`is_less_than`] | `a - b <= -EPSILON` |
//!
//! The strict predicates use `EPSILON` as a one-sided threshold, so a pair
//! differing by exactly `EPSILON` is both equal and strictly ordered, and
//! inputs whose difference rounds inside the band can be none of the
//! three.
//!
//! # Examples
//!
//! ```
//! use strict_scalar::error::FloatError;
//! use strict_scalar::math::float;
//!
//! assert_eq!(float::add(1.5, 2.25), Ok(3.75));
//! assert_eq!(float::add(f32::MAX, 1.0), Err(FloatError::ResultUnchanged));
//! assert_eq!(float::add(f32::MAX, f32::MAX), Err(FloatError::ResultInconsistent));
//! assert_eq!(float::divide(1.0, 0.0), Err(FloatError::DivideByZero));
//! ```

use core::cmp::Ordering;

use crate::error::FloatError;
use crate::required::required_true;

/// Fixed comparison tolerance: the machine epsilon of `f32`.
pub const EPSILON: f32 = f32::EPSILON;

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Returns `true` if `a` and `b` differ by at most [`EPSILON`].
#[inline]
#[must_use]
pub fn is_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

/// Returns `true` if `a` exceeds `b` by at least [`EPSILON`].
#[inline]
#[must_use]
pub fn is_greater_than(a: f32, b: f32) -> bool {
    (a - b) >= EPSILON
}

/// Returns `true` if `a` falls short of `b` by at least [`EPSILON`].
#[inline]
#[must_use]
pub fn is_less_than(a: f32, b: f32) -> bool {
    (a - b) <= -EPSILON
}

/// [`is_greater_than`] or [`is_equal`].
#[inline]
#[must_use]
pub fn is_greater_or_equal(a: f32, b: f32) -> bool {
    is_greater_than(a, b) || is_equal(a, b)
}

/// [`is_less_than`] or [`is_equal`].
#[inline]
#[must_use]
pub fn is_less_or_equal(a: f32, b: f32) -> bool {
    is_less_than(a, b) || is_equal(a, b)
}

/// Three-way comparison built on [`is_less_than`] and [`is_greater_than`].
///
/// Values inside the tolerance band compare [`Ordering::Equal`].
#[must_use]
pub fn compare(a: f32, b: f32) -> Ordering {
    if is_less_than(a, b) {
        Ordering::Less
    } else if is_greater_than(a, b) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Compares two optional references by pointee value; an absent reference
/// orders before any present one.
///
/// # Panics
///
/// Panics when both references are absent.
#[track_caller]
#[must_use]
pub fn compare_ref(a: Option<&f32>, b: Option<&f32>) -> Ordering {
    required_true(a.is_some() || b.is_some());
    match (a, b) {
        (Some(a), Some(b)) => compare(*a, *b),
        (None, _) => Ordering::Less,
        (_, None) => Ordering::Greater,
    }
}

/// Returns `a` if it is strictly less than `b`, otherwise `b`.
#[inline]
#[must_use]
pub fn minimum(a: f32, b: f32) -> f32 {
    if is_less_than(a, b) { a } else { b }
}

/// Returns `a` if it is strictly greater than `b`, otherwise `b`.
#[inline]
#[must_use]
pub fn maximum(a: f32, b: f32) -> f32 {
    if is_greater_than(a, b) { a } else { b }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Consistency-checked addition.
///
/// # Errors
///
/// - [`FloatError::ResultUnchanged`] if a non-zero operand left the other
///   operand unchanged.
/// - [`FloatError::ResultInconsistent`] if `sum - a` is not equal to `b`.
pub fn add(a: f32, b: f32) -> Result<f32, FloatError> {
    let sum = a + b;
    if (b != 0.0 && sum == a) || (a != 0.0 && sum == b) {
        tracing::trace!(a, b, "float addition swamped");
        return Err(FloatError::ResultUnchanged);
    }
    if !is_equal(sum - a, b) {
        tracing::trace!(a, b, sum, "float addition inconsistent");
        return Err(FloatError::ResultInconsistent);
    }
    Ok(sum)
}

/// Consistency-checked subtraction.
///
/// # Errors
///
/// - [`FloatError::ResultUnchanged`] if `b` had no effect on `a`, or `a`
///   had no effect on `-b`.
/// - [`FloatError::ResultInconsistent`] if `difference - a` is not equal
///   to `-b`.
pub fn subtract(a: f32, b: f32) -> Result<f32, FloatError> {
    let difference = a - b;
    if (b != 0.0 && difference == a) || (a != 0.0 && difference == -b) {
        tracing::trace!(a, b, "float subtraction swamped");
        return Err(FloatError::ResultUnchanged);
    }
    if !is_equal(difference - a, -b) {
        tracing::trace!(a, b, difference, "float subtraction inconsistent");
        return Err(FloatError::ResultInconsistent);
    }
    Ok(difference)
}

/// Consistency-checked multiplication.
///
/// A product within [`EPSILON`] of zero is returned as exactly `0.0`.
///
/// # Errors
///
/// Returns [`FloatError::ResultInconsistent`] if either operand is NaN, or
/// if dividing the product by the larger operand does not give back the
/// smaller one.
pub fn multiply(a: f32, b: f32) -> Result<f32, FloatError> {
    // NaN is unordered, so it must not reach the larger/smaller split.
    if a.is_nan() || b.is_nan() {
        tracing::trace!(a, b, "float multiplication of NaN");
        return Err(FloatError::ResultInconsistent);
    }
    let larger = maximum(a, b);
    let smaller = minimum(a, b);
    let product = larger * smaller;
    if is_equal(product, 0.0) {
        return Ok(0.0);
    }
    if !is_equal(product / larger, smaller) {
        tracing::trace!(a, b, product, "float multiplication inconsistent");
        return Err(FloatError::ResultInconsistent);
    }
    Ok(product)
}

/// Consistency-checked division.
///
/// # Errors
///
/// - [`FloatError::DivideByZero`] if `b` is within [`EPSILON`] of zero.
/// - [`FloatError::ResultInconsistent`] if `quotient * b` is not equal to
///   `a`.
pub fn divide(a: f32, b: f32) -> Result<f32, FloatError> {
    if is_equal(b, 0.0) {
        tracing::trace!(a, b, "float division by zero");
        return Err(FloatError::DivideByZero);
    }
    let quotient = a / b;
    if !is_equal(a, quotient * b) {
        tracing::trace!(a, b, quotient, "float division inconsistent");
        return Err(FloatError::ResultInconsistent);
    }
    Ok(quotient)
}
