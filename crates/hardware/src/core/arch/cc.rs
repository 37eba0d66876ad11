//! Condition codes.
//!
//! The LC-3 keeps three sign flags. After any flag-affecting operation exactly
//! one of them is set, so they are modelled as a single enum rather than three
//! booleans that could disagree.

use std::fmt;

/// Sign bit of a machine word.
const SIGN_BIT: u16 = 0x8000;

/// The N/Z/P condition code register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConditionCode {
    /// Last result was negative (bit 15 set).
    Negative,
    /// Last result was zero. This is the power-on state.
    #[default]
    Zero,
    /// Last result was positive and non-zero.
    Positive,
}

impl ConditionCode {
    /// Classifies a 16-bit result.
    ///
    /// # Examples
    ///
    /// ```
    /// use lc3sim_core::core::arch::cc::ConditionCode;
    ///
    /// assert_eq!(ConditionCode::from_result(0), ConditionCode::Zero);
    /// assert_eq!(ConditionCode::from_result(0x8000), ConditionCode::Negative);
    /// assert_eq!(ConditionCode::from_result(0x7FFF), ConditionCode::Positive);
    /// ```
    pub const fn from_result(val: u16) -> Self {
        if val == 0 {
            Self::Zero
        } else if val & SIGN_BIT != 0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the flags as an n/z/p mask, n in bit 2.
    pub const fn bits(self) -> u16 {
        match self {
            Self::Negative => 0b100,
            Self::Zero => 0b010,
            Self::Positive => 0b001,
        }
    }

    /// Returns `true` if any flag requested by a BR mask is set.
    pub const fn matches(self, nzp: u16) -> bool {
        self.bits() & nzp != 0
    }

    /// N flag.
    pub const fn n(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Z flag.
    pub const fn z(self) -> bool {
        matches!(self, Self::Zero)
    }

    /// P flag.
    pub const fn p(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N = {}  Z = {}  P = {}",
            u8::from(self.n()),
            u8::from(self.z()),
            u8::from(self.p())
        )
    }
}
