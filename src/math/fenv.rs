//! Per-thread floating-point environment.
//!
//! Rust code cannot soundly reprogram the processor's rounding-mode
//! register: the optimiser assumes round-to-nearest and no observable
//! exception flags.  This module models the environment the conversion
//! routine needs instead: a rounding direction and a sticky set of
//! [`Exceptions`], stored per thread.
//!
//! # Scoping
//!
//! The active rounding mode is a scoped resource.  [`RoundingGuard`]
//! installs a mode and puts the previous one back when it is dropped,
//! on every exit path: early returns, `?` and unwinding included.
//!
//! ```
//! use strict_scalar::domain::RoundingMode;
//! use strict_scalar::math::fenv::{self, RoundingGuard};
//!
//! assert_eq!(fenv::rounding_mode(), RoundingMode::Nearest);
//! {
//!     let _guard = RoundingGuard::install(RoundingMode::Upward);
//!     assert_eq!(fenv::round_to_integral(6.2), 7.0);
//! }
//! assert_eq!(fenv::rounding_mode(), RoundingMode::Nearest);
//! ```

use core::cell::Cell;
use core::marker::PhantomData;

use bitflags::bitflags;

use crate::domain::RoundingMode;

bitflags! {
    /// Sticky IEEE 754 exception flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Exceptions: u8 {
        /// Invalid operation (NaN operand, out-of-range conversion).
        const INVALID = 0b0_0001;
        /// Division of a finite non-zero value by zero.
        const DIVIDE_BY_ZERO = 0b0_0010;
        /// Result magnitude too large for the format.
        const OVERFLOW = 0b0_0100;
        /// Result magnitude too small for the format.
        const UNDERFLOW = 0b0_1000;
        /// Result was rounded.
        const INEXACT = 0b1_0000;
    }
}

thread_local! {
    static ROUNDING: Cell<RoundingMode> = const { Cell::new(RoundingMode::Nearest) };
    static RAISED: Cell<Exceptions> = const { Cell::new(Exceptions::empty()) };
}

/// Returns the rounding mode active on the calling thread.
#[must_use]
pub fn rounding_mode() -> RoundingMode {
    ROUNDING.with(Cell::get)
}

/// Installs `mode` on the calling thread and returns the previous mode.
///
/// Prefer [`RoundingGuard`], which restores the previous mode
/// automatically.
pub fn set_rounding_mode(mode: RoundingMode) -> RoundingMode {
    ROUNDING.with(|cell| cell.replace(mode))
}

/// Returns the exception flags raised on the calling thread since they
/// were last cleared.
#[must_use]
pub fn exceptions() -> Exceptions {
    RAISED.with(Cell::get)
}

/// Clears every exception flag on the calling thread.
pub fn clear_exceptions() {
    RAISED.with(|cell| cell.set(Exceptions::empty()));
}

/// Raises `flags` on the calling thread.
pub fn raise(flags: Exceptions) {
    RAISED.with(|cell| cell.set(cell.get() | flags));
}

/// Rounds `value` to an integral `f32` under the active rounding mode.
///
/// Raises [`Exceptions::INVALID`] for NaN and [`Exceptions::INEXACT`]
/// when the value had a fractional part.  Infinities are returned
/// unchanged.
#[must_use]
pub fn round_to_integral(value: f32) -> f32 {
    if value.is_nan() {
        raise(Exceptions::INVALID);
        return value;
    }
    let rounded = match rounding_mode() {
        RoundingMode::Nearest => value.round_ties_even(),
        RoundingMode::Downward => value.floor(),
        RoundingMode::Upward => value.ceil(),
        RoundingMode::TowardsZero => value.trunc(),
    };
    if rounded != value {
        raise(Exceptions::INEXACT);
    }
    rounded
}

/// Scoped rounding-mode installation.
///
/// Saves the calling thread's rounding mode, installs a new one, and
/// restores the saved mode on drop.  The guard is neither `Send` nor
/// `Sync`: it must be dropped on the thread that created it.
#[derive(Debug)]
#[must_use = "the previous rounding mode is restored as soon as the guard is dropped"]
pub struct RoundingGuard {
    previous: RoundingMode,
    _not_send: PhantomData<*const ()>,
}

impl RoundingGuard {
    /// Installs `mode` until the returned guard is dropped.
    pub fn install(mode: RoundingMode) -> Self {
        let previous = set_rounding_mode(mode);
        tracing::trace!(?previous, installed = ?mode, "rounding mode installed");
        Self {
            previous,
            _not_send: PhantomData,
        }
    }

    /// The mode that will be restored on drop.
    #[must_use]
    pub const fn previous(&self) -> RoundingMode {
        self.previous
    }
}

impl Drop for RoundingGuard {
    fn drop(&mut self) {
        let _ = set_rounding_mode(self.previous);
        tracing::trace!(restored = ?self.previous, "rounding mode restored");
    }
}
