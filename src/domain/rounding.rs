//! Rounding direction for float-to-integer conversion.

use core::fmt;

use crate::error::FloatError;

/// Specifies how a fractional `f32` is mapped to an integer.
///
/// The four variants map one-to-one onto the IEEE 754 rounding
/// directions.  Raw codes `0..=3` convert via [`TryFrom<u32>`], in
/// declaration order.
///
/// | Mode | `6.2` | `18.7` / `19.7` |
/// |------|-------|-----------------|
/// | [`Nearest`](Self::Nearest) | 6 | 19 (`18.7`) |
/// | [`Downward`](Self::Downward) | 6 | 19 (`19.7`) |
/// | [`Upward`](Self::Upward) | 7 | 20 (`19.7`) |
/// | [`TowardsZero`](Self::TowardsZero) | 6 | 19 (`19.7`) |
///
/// # Examples
///
/// ```
/// use strict_scalar::domain::RoundingMode;
///
/// let mode = RoundingMode::try_from(2).expect("2 is a defined code");
/// assert_eq!(mode, RoundingMode::Upward);
/// assert!(RoundingMode::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum RoundingMode {
    /// Round to the nearest integer, ties to even.
    #[default]
    Nearest = 0,
    /// Round towards negative infinity (floor).
    Downward = 1,
    /// Round towards positive infinity (ceiling).
    Upward = 2,
    /// Round towards zero (truncate).
    TowardsZero = 3,
}

impl RoundingMode {
    /// Every defined mode, in code order.
    pub const ALL: [Self; 4] = [
        Self::Nearest,
        Self::Downward,
        Self::Upward,
        Self::TowardsZero,
    ];

    /// Returns the raw code of this mode.
    #[must_use]
    pub const fn code(&self) -> u32 {
        *self as u32
    }

    /// Returns a human-readable description of the rounding direction.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Nearest => "round to nearest, ties to even",
            Self::Downward => "round towards negative infinity",
            Self::Upward => "round towards positive infinity",
            Self::TowardsZero => "round towards zero",
        }
    }
}

impl TryFrom<u32> for RoundingMode {
    type Error = FloatError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Downward),
            2 => Ok(Self::Upward),
            3 => Ok(Self::TowardsZero),
            other => Err(FloatError::RoundingModeInvalid(other)),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
