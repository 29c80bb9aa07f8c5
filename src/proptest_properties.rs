//! Property-based tests using `proptest` for the arithmetic contracts.
//!
//! 1. **Integer add / sub**: succeed exactly when the true result fits.
//! 2. **Integer mul / div**: zero operands short-circuit; a zero divisor
//!    always fails; the remainder reconstructs the dividend.
//! 3. **Growth**: `times_and_a_half_even` is even and at least 1.5×.
//! 4. **Float comparison**: reflexive equality, `>=` is `>` or `==`.
//! 5. **Float arithmetic**: every `Ok` result passes its own check, and a
//!    NaN or infinite operand in either position never yields `Ok`.
//! 6. **Conversion**: matches the mode's rounding and restores the
//!    caller's mode on every path.

use core::cmp::Ordering;

use proptest::prelude::*;

use crate::domain::RoundingMode;
use crate::error::{FloatError, IntegerError};
use crate::math::fenv::{self, RoundingGuard};
use crate::math::{float, to_integer, to_usize, UMax, UnsignedArithmetic};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Every finite `f32`, both signs.
fn finite_strategy() -> impl Strategy<Value = f32> {
    proptest::num::f32::NORMAL | proptest::num::f32::SUBNORMAL | proptest::num::f32::ZERO
}

/// NaN and both infinities.
fn non_finite_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

/// Moderate magnitudes where consistency checks are expected to pass.
fn moderate_strategy() -> impl Strategy<Value = f32> {
    -1.0e3f32..1.0e3f32
}

/// One of the four defined rounding modes.
fn mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

// ---------------------------------------------------------------------------
// Property 1: Integer add / sub
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_size_add_matches_checked(a in any::<usize>(), b in any::<usize>()) {
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(a.safe_add(b), Ok(sum)),
            None => prop_assert_eq!(a.safe_add(b), Err(IntegerError::ResultInconsistent)),
        }
    }

    #[test]
    fn prop_umax_add_matches_checked(a in any::<UMax>(), b in any::<UMax>()) {
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(a.safe_add(b), Ok(sum)),
            None => prop_assert_eq!(a.safe_add(b), Err(IntegerError::ResultInconsistent)),
        }
    }

    #[test]
    fn prop_size_sub(a in any::<usize>(), b in any::<usize>()) {
        if a >= b {
            prop_assert_eq!(a.safe_sub(b), Ok(a - b));
        } else {
            prop_assert_eq!(a.safe_sub(b), Err(IntegerError::ResultInconsistent));
        }
    }

    // -----------------------------------------------------------------------
    // Property 2: Integer mul / div
    // -----------------------------------------------------------------------

    #[test]
    fn prop_mul_by_zero(a in any::<usize>(), b in any::<UMax>()) {
        prop_assert_eq!(a.safe_mul(0), Ok(0));
        prop_assert_eq!(0usize.safe_mul(a), Ok(0));
        prop_assert_eq!(b.safe_mul(0), Ok(0));
        prop_assert_eq!(0u128.safe_mul(b), Ok(0));
    }

    #[test]
    fn prop_mul_matches_checked(a in any::<usize>(), b in any::<usize>()) {
        match a.checked_mul(b) {
            Some(product) => prop_assert_eq!(a.safe_mul(b), Ok(product)),
            None => prop_assert_eq!(a.safe_mul(b), Err(IntegerError::ResultInconsistent)),
        }
    }

    #[test]
    fn prop_div_by_zero(a in any::<UMax>()) {
        let mut rem = 7;
        prop_assert_eq!(a.safe_div(0, Some(&mut rem)), Err(IntegerError::DivideByZero));
        prop_assert_eq!(rem, 7);
    }

    #[test]
    fn prop_div_reconstructs(a in any::<usize>(), b in 1usize..=usize::MAX) {
        let mut rem = 0;
        let Ok(q) = a.safe_div(b, Some(&mut rem)) else {
            return Err(TestCaseError::fail("non-zero divisor must succeed"));
        };
        prop_assert!(rem < b);
        prop_assert_eq!(q * b + rem, a);
        prop_assert_eq!(a.safe_div(b, None), Ok(q));
    }

    // -----------------------------------------------------------------------
    // Property 3: Growth
    // -----------------------------------------------------------------------

    #[test]
    fn prop_growth_even_and_large_enough(current in 1usize..usize::MAX / 2) {
        let grown = usize::times_and_a_half_even(current);
        prop_assert_eq!(grown % 2, 0);
        prop_assert!(grown >= current + current / 2);
        prop_assert!(grown <= current + current / 2 + 1);
    }

    #[test]
    fn prop_growth_never_shrinks(current in any::<UMax>()) {
        prop_assert!(u128::times_and_a_half_even(current) >= current);
    }

    // -----------------------------------------------------------------------
    // Property 4: Float comparison
    // -----------------------------------------------------------------------

    #[test]
    fn prop_equal_is_reflexive(x in finite_strategy()) {
        prop_assert!(float::is_equal(x, x));
        prop_assert_eq!(float::compare(x, x), Ordering::Equal);
    }

    #[test]
    fn prop_or_equal_is_disjunction(x in finite_strategy(), y in finite_strategy()) {
        prop_assert_eq!(
            float::is_greater_or_equal(x, y),
            float::is_greater_than(x, y) || float::is_equal(x, y)
        );
        prop_assert_eq!(
            float::is_less_or_equal(x, y),
            float::is_less_than(x, y) || float::is_equal(x, y)
        );
    }

    #[test]
    fn prop_compare_is_antisymmetric(x in finite_strategy(), y in finite_strategy()) {
        prop_assert_eq!(float::compare(x, y), float::compare(y, x).reverse());
    }

    // -----------------------------------------------------------------------
    // Property 5: Float arithmetic
    // -----------------------------------------------------------------------

    #[test]
    fn prop_float_add_verified(a in finite_strategy(), b in finite_strategy()) {
        match float::add(a, b) {
            Ok(sum) => prop_assert!(float::is_equal(sum - a, b)),
            Err(err) => prop_assert!(matches!(
                err,
                FloatError::ResultUnchanged | FloatError::ResultInconsistent
            )),
        }
    }

    #[test]
    fn prop_float_sub_verified(a in finite_strategy(), b in finite_strategy()) {
        match float::subtract(a, b) {
            Ok(diff) => prop_assert!(float::is_equal(diff - a, -b)),
            Err(err) => prop_assert!(matches!(
                err,
                FloatError::ResultUnchanged | FloatError::ResultInconsistent
            )),
        }
    }

    #[test]
    fn prop_float_mul_never_infinite(a in finite_strategy(), b in finite_strategy()) {
        if let Ok(product) = float::multiply(a, b) {
            prop_assert!(product.is_finite());
        }
    }

    #[test]
    fn prop_float_div_verified(a in finite_strategy(), b in finite_strategy()) {
        match float::divide(a, b) {
            Ok(quotient) => prop_assert!(float::is_equal(a, quotient * b)),
            Err(FloatError::DivideByZero) => prop_assert!(float::is_equal(b, 0.0)),
            Err(err) => prop_assert_eq!(err, FloatError::ResultInconsistent),
        }
    }

    #[test]
    fn prop_float_add_moderate_integers(a in -1000i16..1000, b in -1000i16..1000) {
        // Small integers are exact in f32, so addition must succeed.
        let (fa, fb) = (f32::from(a), f32::from(b));
        prop_assert_eq!(float::add(fa, fb), Ok(f32::from(a + b)));
    }

    #[test]
    fn prop_float_non_finite_operand_fails(x in non_finite_strategy(), y in finite_strategy()) {
        prop_assert!(float::add(x, y).is_err());
        prop_assert!(float::add(y, x).is_err());
        prop_assert!(float::subtract(x, y).is_err());
        prop_assert!(float::subtract(y, x).is_err());
        prop_assert!(float::multiply(x, y).is_err());
        prop_assert!(float::multiply(y, x).is_err());
        prop_assert!(float::divide(x, y).is_err());
        prop_assert!(float::divide(y, x).is_err());
    }

    #[test]
    fn prop_float_divide_by_zero(a in moderate_strategy()) {
        prop_assert_eq!(float::divide(a, 0.0), Err(FloatError::DivideByZero));
    }

    // -----------------------------------------------------------------------
    // Property 6: Conversion
    // -----------------------------------------------------------------------

    #[test]
    fn prop_conversion_matches_mode(value in 0.0f32..1.0e6, mode in mode_strategy()) {
        let expected = match mode {
            RoundingMode::Nearest => value.round_ties_even(),
            RoundingMode::Downward => value.floor(),
            RoundingMode::Upward => value.ceil(),
            RoundingMode::TowardsZero => value.trunc(),
        };
        prop_assert_eq!(to_integer::<u64>(value, mode), Ok(expected as u64));
    }

    #[test]
    fn prop_conversion_restores_mode(
        value in any::<f32>(),
        outer in mode_strategy(),
        requested in mode_strategy(),
    ) {
        let _guard = RoundingGuard::install(outer);
        let _ = to_usize(value, requested);
        prop_assert_eq!(fenv::rounding_mode(), outer);
    }

    #[test]
    fn prop_negative_rejected(value in -1.0e30f32..-1.0e-3, mode in mode_strategy()) {
        prop_assert_eq!(to_usize(value, mode), Err(FloatError::ValueIsNegative));
    }
}
