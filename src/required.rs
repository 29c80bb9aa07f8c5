//! Fail-fast guards for conditions the library itself establishes.
//!
//! These are *not* a recoverable error path: a failing guard means an
//! internal invariant was broken, so the current thread panics.  Callers'
//! mistakes (overflow, division by zero, ...) are reported through
//! [`error`](crate::error) instead.

use core::cmp::Ordering;

/// Returns the contained value, panicking if it is absent.
///
/// # Panics
///
/// Panics when `value` is `None`.
///
/// # Examples
///
/// ```
/// use strict_scalar::required::required;
///
/// assert_eq!(required(Some(3)), 3);
/// ```
#[track_caller]
#[allow(clippy::panic)]
pub fn required<T>(value: Option<T>) -> T {
    match value {
        Some(v) => v,
        None => panic!("required value is absent"),
    }
}

/// Panics unless `check` holds.
///
/// # Panics
///
/// Panics when `check` is `false`.
#[track_caller]
#[allow(clippy::panic)]
pub fn required_true(check: bool) {
    if !check {
        panic!("required condition does not hold");
    }
}

/// Three-way comparison of two references by address.
///
/// An absent reference orders before any present one.  Comparing two
/// absent references is undefined and trips [`required_true`].
///
/// # Panics
///
/// Panics when both `a` and `b` are `None`.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use strict_scalar::required::compare_addresses;
///
/// let pair = [1u8, 2u8];
/// assert_eq!(compare_addresses(Some(&pair[0]), Some(&pair[1])), Ordering::Less);
/// assert_eq!(compare_addresses(None, Some(&pair[0])), Ordering::Less);
/// ```
#[track_caller]
pub fn compare_addresses<T: ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    required_true(a.is_some() || b.is_some());
    let address = |r: Option<&T>| r.map_or(0, |r| (r as *const T).cast::<()>() as usize);
    address(a).cmp(&address(b))
}
