//! Two-state binary logic values with truth-table-based operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single binary logic value.
///
/// The simulator is strictly two-state: every wire carries either `Zero`
/// or `One`. There is no unknown or high-impedance state; out-of-range
/// inputs are rejected at the conversion boundary with [`InvalidSignal`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
}

/// Error produced when a value outside {0, 1} is presented as a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid signal value {0}: expected 0 or 1")]
pub struct InvalidSignal(pub u8);

impl Bit {
    /// Converts a boolean to a [`Bit`].
    pub fn from_bool(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Converts a character to a [`Bit`], accepting only '0' and '1'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Returns `true` if this is `One`.
    pub fn is_high(self) -> bool {
        self == Bit::One
    }

    /// Returns the value as 0 or 1.
    pub fn as_u64(self) -> u64 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = InvalidSignal;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(InvalidSignal(other)),
        }
    }
}

impl Default for Bit {
    fn default() -> Self {
        Bit::Zero
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

/// AND truth table: `1 & 1 = 1`, everything else `0`.
impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Bit::One, Bit::One) => Bit::One,
            _ => Bit::Zero,
        }
    }
}

/// OR truth table: `0 | 0 = 0`, everything else `1`.
impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Bit::Zero, Bit::Zero) => Bit::Zero,
            _ => Bit::One,
        }
    }
}

/// XOR truth table: `1` exactly when the operands differ.
impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Bit::from_bool(self != rhs)
    }
}

/// NOT truth table: `!0 = 1`, `!1 = 0`.
impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}
