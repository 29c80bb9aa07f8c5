//! Checked arithmetic for the three numeric families.
//!
//! This module provides [`UnsignedArithmetic`] for the integer families,
//! the `f32` family in [`float`], float-to-integer [`conversion`] over the
//! per-thread floating-point environment in [`fenv`], and
//! [`ConsistentArithmetic`] as the generic surface over all of them.
//!
//! # Feature-gated families
//!
//! | Feature | Modules | Use case |
//! |---------|---------|----------|
//! | always | [`UnsignedArithmetic`], [`UMax`] | `usize` / `u128` overflow checks |
//! | `float` | `float`, `fenv`, `conversion` | `f32` consistency checks and rounding |

mod consistent;
mod integer;

#[cfg(feature = "float")]
pub mod conversion;
#[cfg(feature = "float")]
pub mod fenv;
#[cfg(feature = "float")]
pub mod float;

pub use consistent::{consistent_product, consistent_sum, ConsistentArithmetic};
pub use integer::{UMax, UnsignedArithmetic};

#[cfg(feature = "float")]
pub use conversion::{to_integer, to_integer_raw, to_umax, to_usize, ConversionTarget};
#[cfg(feature = "float")]
pub use fenv::{Exceptions, RoundingGuard};
