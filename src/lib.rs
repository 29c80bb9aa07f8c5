//! # Strict Scalar
//!
//! Overflow-checked arithmetic and strict-tolerance comparison for three
//! numeric domains: `f32`, platform-width `usize` and maximum-width
//! `u128`.  Every operation either produces a result that has been
//! verified against its operands or reports exactly why it could not.
//! Nothing wraps, truncates or loses precision silently.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `float` | yes | `f32` family, floating-point environment, float-to-integer conversion |
//!
//! # Quick Start
//!
//! ```rust
//! use strict_scalar::domain::RoundingMode;
//! use strict_scalar::error::{FloatError, IntegerError};
//! use strict_scalar::math::{float, to_usize, UnsignedArithmetic};
//!
//! // Integers: overflow is an error, not a wrap.
//! assert_eq!(usize::MAX.safe_add(1), Err(IntegerError::ResultInconsistent));
//! assert_eq!(6usize.safe_mul(7), Ok(42));
//!
//! // Division reports the remainder only when asked to.
//! let mut remainder = 0;
//! assert_eq!(17u128.safe_div(5, Some(&mut remainder)), Ok(3));
//! assert_eq!(remainder, 2);
//!
//! // Floats: the result is re-derived and checked.
//! assert_eq!(float::multiply(3.0, 4.0), Ok(12.0));
//! assert_eq!(float::add(f32::MAX, 1.0), Err(FloatError::ResultUnchanged));
//!
//! // Conversion rounds under an explicit mode.
//! assert_eq!(to_usize(6.2, RoundingMode::Upward), Ok(7));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ ConsistentArithmetic │  one generic surface over f32 / usize / u128
//! └──────────┬───────────┘
//!      ┌─────┴──────┐
//!      ▼            ▼
//! ┌─────────┐  ┌─────────┐
//! │ integer │  │  float  │  epsilon-tolerant checks
//! └────┬────┘  └────┬────┘
//!      │            ▼
//!      │     ┌────────────┐
//!      │     │ conversion │  f32 -> usize / u64, widened to u128
//!      │     └─────┬──────┘
//!      │           ▼
//!      │     ┌────────────┐
//!      │     │    fenv    │  per-thread rounding mode + exception flags
//!      │     └─────┬──────┘
//!      ▼           ▼
//! ┌────────────────────────┐
//! │ required (fatal guard) │
//! └────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | [`RoundingMode`](domain::RoundingMode) |
//! | [`math`] | [`UnsignedArithmetic`](math::UnsignedArithmetic), `float`, `fenv`, `conversion`, [`ConsistentArithmetic`](math::ConsistentArithmetic) |
//! | [`required`] | Fail-fast guards and the address comparator |
//! | [`error`] | [`IntegerError`](error::IntegerError), [`FloatError`](error::FloatError), [`Error`](error::Error) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Error model
//!
//! Recoverable conditions (overflow, precision loss, division by zero,
//! invalid conversion input) are returned as `Err`.  Violations of
//! invariants the library establishes itself panic through
//! [`required::required_true`].
//!
//! Failures are logged with [`tracing`] at `TRACE` level; the library
//! never installs a subscriber.

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod required;

#[cfg(all(test, feature = "float"))]
mod proptest_properties;
